//! Inline formatting: escaping plus `**strong**` and `*emphasis*`.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;

static STRONG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static EMPHASIS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+?)\*").unwrap());

/// Render a single line of text with inline formatting.
///
/// The text is HTML-escaped first, then `**X**` pairs become `<strong>` and
/// the remaining `*X*` pairs become `<em>`. Unpaired asterisks stay literal.
///
/// # Examples
///
/// ```
/// use notemark_renderer::inline;
///
/// assert_eq!(
///     inline("**bold** and *italic*"),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// assert_eq!(inline("2 * 3 < 7"), "2 * 3 &lt; 7");
/// ```
#[must_use]
pub fn inline(text: &str) -> String {
    let escaped = escape_html(text);
    let strong = STRONG_PATTERN.replace_all(&escaped, "<strong>${1}</strong>");
    EMPHASIS_PATTERN
        .replace_all(&strong, "<em>${1}</em>")
        .into_owned()
}
