//! HTML text escaping.

/// Escape text for safe inclusion in HTML content or attribute values.
///
/// Maps `&`, `<`, `>`, `"` and `'` to their entity equivalents. Callers must
/// escape before introducing any markup so that entities are never escaped twice.
///
/// # Examples
///
/// ```
/// use notemark_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    push_escaped(s, &mut result);
    result
}

/// Append escaped text to an existing buffer.
pub(crate) fn push_escaped(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_entity_is_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_leaves_unicode_and_asterisks() {
        assert_eq!(escape_html("• **ok** ◦"), "• **ok** ◦");
    }

    #[test]
    fn test_push_escaped_appends() {
        let mut out = "<p>".to_owned();
        push_escaped("1 < 2", &mut out);
        assert_eq!(out, "<p>1 &lt; 2");
    }
}
