//! Display of categorized note synthesis results.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::renderer::NoteRenderer;

/// Shown when a note produced no categories.
pub const EMPTY_SYNTHESIS_HTML: &str = "<p>No categories extracted.</p>";

/// One category extracted from a note, with its synthesized content.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisEntry {
    /// Category key, e.g. `work_history`.
    pub category: String,
    /// Markdown-lite content for the category.
    pub content: String,
}

impl SynthesisEntry {
    /// Create an entry.
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
        }
    }
}

/// Human-readable, escaped label for a category key.
///
/// # Examples
///
/// ```
/// use notemark_renderer::category_label;
///
/// assert_eq!(category_label("work_history"), "work history");
/// ```
#[must_use]
pub fn category_label(category: &str) -> String {
    escape_html(&category.replace('_', " "))
}

/// Render synthesis entries as category blocks, in order.
pub fn render_synthesis(renderer: &NoteRenderer, entries: &[SynthesisEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_SYNTHESIS_HTML.to_owned();
    }

    let mut out = String::new();
    for entry in entries {
        write!(
            out,
            r#"<div class="category-item"><div><strong>{}</strong></div><div class="category-content">{}</div></div>"#,
            category_label(&entry.category),
            renderer.render(&entry.content)
        )
        .unwrap();
    }
    out
}
