//! Search-term highlighting for contact search results.

use regex::RegexBuilder;

use crate::escape::{escape_html, push_escaped};

/// Default inline style for `<mark>` elements.
pub const DEFAULT_MARK_STYLE: &str = "background: #ffeb3b; padding: 0.1rem 0.2rem;";

/// Wraps case-insensitive query matches in `<mark>` elements.
///
/// Matching runs against the raw text and each segment is escaped on its own,
/// so a query can never land inside an HTML entity.
#[derive(Clone, Debug)]
pub struct Highlighter {
    style: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            style: DEFAULT_MARK_STYLE.to_owned(),
        }
    }
}

impl Highlighter {
    /// Create a highlighter using [`DEFAULT_MARK_STYLE`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different inline style for `<mark>`. The style is escaped on output.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Escape `text` and mark every occurrence of `query`.
    pub fn highlight(&self, text: &str, query: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if query.is_empty() {
            return escape_html(text);
        }

        let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        else {
            tracing::warn!(query, "Could not build highlight pattern");
            return escape_html(text);
        };

        let style = escape_html(&self.style);
        let mut out = String::with_capacity(text.len() + 64);
        let mut last = 0;
        let mut matches = 0;
        for m in pattern.find_iter(text) {
            push_escaped(&text[last..m.start()], &mut out);
            out.push_str(r#"<mark style=""#);
            out.push_str(&style);
            out.push_str(r#"">"#);
            push_escaped(m.as_str(), &mut out);
            out.push_str("</mark>");
            last = m.end();
            matches += 1;
        }
        push_escaped(&text[last..], &mut out);

        tracing::trace!(matches, "Highlighted search term");
        out
    }
}

/// Highlight `query` in `text` with the default style.
///
/// # Examples
///
/// ```
/// use notemark_renderer::highlight;
///
/// assert_eq!(
///     highlight("Alice & Bob", "bob"),
///     r#"Alice &amp; <mark style="background: #ffeb3b; padding: 0.1rem 0.2rem;">Bob</mark>"#
/// );
/// ```
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    Highlighter::new().highlight(text, query)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mark(s: &str) -> String {
        format!(r#"<mark style="{DEFAULT_MARK_STYLE}">{s}</mark>"#)
    }

    #[test]
    fn test_empty_text_or_query() {
        assert_eq!(highlight("", "x"), "");
        assert_eq!(highlight("<a>", ""), "&lt;a&gt;");
    }

    #[test]
    fn test_case_insensitive_all_matches() {
        assert_eq!(
            highlight("Ann and ANNA", "ann"),
            format!("{} and {}A", mark("Ann"), mark("ANN"))
        );
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert_eq!(highlight("c++ (dev)", "c++"), format!("{} (dev)", mark("c++")));
        assert_eq!(highlight("abc", "a.c"), "abc");
    }

    #[test]
    fn test_never_splits_entities() {
        assert_eq!(highlight("a&b", "amp"), "a&amp;b");
        assert_eq!(highlight("a&b", "&"), format!("a{}b", mark("&amp;")));
    }

    #[test]
    fn test_match_text_is_escaped() {
        assert_eq!(
            highlight("x<script>y", "<script>"),
            format!("x{}y", mark("&lt;script&gt;"))
        );
    }

    #[test]
    fn test_custom_style_is_escaped() {
        let highlighter = Highlighter::new().with_style(r#"color: red" onclick="x"#);
        let html = highlighter.highlight("hi", "hi");
        assert_eq!(
            html,
            r#"<mark style="color: red&quot; onclick=&quot;x">hi</mark>"#
        );
    }

    #[test]
    fn test_no_match_returns_escaped_text() {
        assert_eq!(highlight("Tom & Jerry", "zed"), "Tom &amp; Jerry");
    }
}
