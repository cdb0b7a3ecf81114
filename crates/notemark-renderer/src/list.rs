//! Bullet detection and list grouping.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::inline::inline;

/// Leading whitespace, one bullet marker, at least one space, then content.
static BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-•*+◦▪]\s+(.+)$").unwrap());

/// A bullet line with its inline content already rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    /// Number of whitespace characters before the bullet marker.
    pub indent: usize,
    /// Inline HTML for the item body.
    pub content: String,
}

impl ListItem {
    /// Parse a line as a bullet item, returning `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use notemark_renderer::ListItem;
    ///
    /// let item = ListItem::parse("  • **Acme** Corp").unwrap();
    /// assert_eq!(item.indent, 2);
    /// assert_eq!(item.content, "<strong>Acme</strong> Corp");
    ///
    /// assert!(ListItem::parse("**not** a bullet").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let caps = BULLET_PATTERN.captures(line)?;
        let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some(Self {
            indent,
            content: inline(content),
        })
    }
}

/// Bullet items collected while the renderer is inside a list.
#[derive(Debug, Default)]
pub(crate) struct ListBuffer {
    items: Vec<ListItem>,
}

impl ListBuffer {
    pub(crate) fn push(&mut self, item: ListItem) {
        self.items.push(item);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write buffered items as `<ul>` groups and clear the buffer.
    ///
    /// Consecutive items sharing an indent form one group; any indent change
    /// starts a new `<ul>`. Returns the number of groups written.
    pub(crate) fn flush(&mut self, indent_em: f64, out: &mut String) -> usize {
        let mut groups = 0;
        for group in self.items.chunk_by(|a, b| a.indent == b.indent) {
            let style = margin_style(group[0].indent, indent_em);
            out.push_str("<ul>");
            for item in group {
                write!(out, "<li{style}>{}</li>", item.content).unwrap();
            }
            out.push_str("</ul>");
            groups += 1;
        }
        self.items.clear();
        groups
    }
}

/// Inline `style` attribute for an indented item, empty at indent zero.
#[allow(clippy::cast_precision_loss)]
fn margin_style(indent: usize, indent_em: f64) -> String {
    if indent == 0 {
        String::new()
    } else {
        format!(r#" style="margin-left: {}em;""#, indent as f64 * indent_em)
    }
}
