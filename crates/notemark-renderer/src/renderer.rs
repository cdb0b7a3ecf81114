//! Line-oriented note renderer.

use crate::classify::classify_line;
use crate::list::{ListBuffer, ListItem};

/// Default character count below which a line may be treated as a header.
pub const DEFAULT_HEADER_MAX_LEN: usize = 60;

/// Default left margin, in `em`, per indent character of a bullet.
pub const DEFAULT_INDENT_EM: f64 = 1.5;

/// Tunables for [`NoteRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Lines with fewer characters than this are header candidates.
    pub header_max_len: usize,
    /// Margin multiplier applied to a bullet's indent character count.
    pub indent_em: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header_max_len: DEFAULT_HEADER_MAX_LEN,
            indent_em: DEFAULT_INDENT_EM,
        }
    }
}

/// Renders note and category text into HTML fragments.
///
/// Input is processed line by line. Bullet lines (`-`, `•`, `*`, `+`, `◦`, `▪`)
/// are buffered and written as `<ul>` groups, one group per run of equal
/// indentation. Blank lines become `<br>` unless they are last. Other lines
/// are classified as headers, job-title entries or plain text blocks.
///
/// The renderer holds no per-call state, so one instance can be shared freely.
///
/// # Example
///
/// ```
/// use notemark_renderer::NoteRenderer;
///
/// let renderer = NoteRenderer::new();
/// assert_eq!(renderer.render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// ```
#[derive(Clone, Debug, Default)]
pub struct NoteRenderer {
    options: RenderOptions,
}

impl NoteRenderer {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer from explicit options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Set the header length threshold.
    #[must_use]
    pub fn with_header_max_len(mut self, len: usize) -> Self {
        self.options.header_max_len = len;
        self
    }

    /// Set the margin multiplier for indented bullets.
    #[must_use]
    pub fn with_indent_em(mut self, em: f64) -> Self {
        self.options.indent_em = em;
        self
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render text to an HTML fragment. Never fails; empty input gives `""`.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let mut output = String::with_capacity(text.len() * 2);
        let mut list = ListBuffer::default();
        let mut list_groups = 0;

        for (i, line) in lines.iter().enumerate() {
            if let Some(item) = ListItem::parse(line) {
                list.push(item);
                continue;
            }

            if !list.is_empty() {
                list_groups += list.flush(self.options.indent_em, &mut output);
            }

            let trimmed = line.trim();
            let is_last = i + 1 == lines.len();
            if trimmed.is_empty() {
                if !is_last {
                    output.push_str("<br>");
                }
                continue;
            }

            let next = lines.get(i + 1).copied();
            classify_line(trimmed, next, self.options.header_max_len).write_html(&mut output);
        }

        if !list.is_empty() {
            list_groups += list.flush(self.options.indent_em, &mut output);
        }

        tracing::debug!(
            lines = lines.len(),
            list_groups,
            html_len = output.len(),
            "Rendered note"
        );
        output
    }

    /// Render optional text; `None` gives `""`.
    pub fn render_optional(&self, text: Option<&str>) -> String {
        text.map(|t| self.render(t)).unwrap_or_default()
    }
}

/// Render text with default options.
///
/// # Examples
///
/// ```
/// use notemark_renderer::render;
///
/// assert_eq!(render(""), "");
/// assert!(render("<script>x</script>").contains("&lt;script&gt;"));
/// ```
#[must_use]
pub fn render(text: &str) -> String {
    NoteRenderer::new().render(text)
}

/// Render optional text with default options; `None` gives `""`.
#[must_use]
pub fn render_optional(text: Option<&str>) -> String {
    NoteRenderer::new().render_optional(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEXT_OPEN: &str = r#"<div style="margin: 0.25em 0;">"#;
    const HEADER_OPEN: &str = r#"<strong style="display: block; margin: 0.75em 0 0.25em;">"#;

    #[test]
    fn test_empty_and_missing_input() {
        assert_eq!(render(""), "");
        assert_eq!(render_optional(None), "");
        assert_eq!(render_optional(Some("")), "");
    }

    #[test]
    fn test_simple_list() {
        assert_eq!(render("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_nested_item_margin() {
        assert_eq!(
            render("  - nested"),
            r#"<ul><li style="margin-left: 3em;">nested</li></ul>"#
        );
    }

    #[test]
    fn test_indent_change_starts_new_group() {
        assert_eq!(
            render("- a\n  - b\n- c"),
            concat!(
                "<ul><li>a</li></ul>",
                r#"<ul><li style="margin-left: 3em;">b</li></ul>"#,
                "<ul><li>c</li></ul>",
            )
        );
    }

    #[test]
    fn test_mixed_bullet_markers_share_a_group() {
        assert_eq!(
            render("• one\n* two\n+ three\n◦ four\n▪ five"),
            "<ul><li>one</li><li>two</li><li>three</li><li>four</li><li>five</li></ul>"
        );
    }

    #[test]
    fn test_inline_formatting_in_text_line() {
        assert_eq!(
            render("**bold** and *italic*"),
            format!("{TEXT_OPEN}<strong>bold</strong> and <em>italic</em></div>")
        );
    }

    #[test]
    fn test_script_is_escaped() {
        let html = render("<script>x</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));

        let html = render("- <img src=x onerror=\"alert(1)\">");
        assert!(!html.contains("<img"));
        assert!(html.contains("&quot;alert(1)&quot;"));
    }

    #[test]
    fn test_header_text_and_list() {
        assert_eq!(
            render("Header:\nline one\n- item"),
            format!(
                "{HEADER_OPEN}Header:</strong>{TEXT_OPEN}line one</div><ul><li>item</li></ul>"
            )
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(
            render("first\n\nsecond\n"),
            format!("{TEXT_OPEN}first</div><br>{TEXT_OPEN}second</div>")
        );
    }

    #[test]
    fn test_blank_line_closes_list() {
        assert_eq!(
            render("- a\n\n- b"),
            "<ul><li>a</li></ul><br><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(render("   "), "");
        assert_eq!(render("\n"), "<br>");
    }

    #[test]
    fn test_crlf_input_matches_lf() {
        assert_eq!(render("Skills:\r\n- Rust\r\n"), render("Skills:\n- Rust\n"));
    }

    #[test]
    fn test_all_caps_header_before_list() {
        assert_eq!(
            render("EXPERIENCE\n- Acme"),
            format!("{HEADER_OPEN}EXPERIENCE</strong><ul><li>Acme</li></ul>")
        );
    }

    #[test]
    fn test_all_caps_last_line_is_text() {
        assert_eq!(render("ASAP"), format!("{TEXT_OPEN}ASAP</div>"));
    }

    #[test]
    fn test_job_title_line() {
        let html = render("CTO at Initech: 2018 - 2021 • 3 yrs");
        assert!(html.starts_with(r#"<div class="job-entry""#));
        assert!(html.contains("<strong>CTO at Initech</strong>"));
        assert!(html.contains("• 3 yrs"));
    }

    #[test]
    fn test_custom_options() {
        let renderer = NoteRenderer::new().with_indent_em(1.0).with_header_max_len(5);
        assert_eq!(
            renderer.render("  - a"),
            r#"<ul><li style="margin-left: 2em;">a</li></ul>"#
        );
        assert_eq!(renderer.render("Notes:"), format!("{TEXT_OPEN}Notes:</div>"));
        assert_eq!(renderer.options().header_max_len, 5);
    }

    #[test]
    fn test_unbalanced_asterisks_degrade() {
        assert_eq!(render("**oops"), format!("{TEXT_OPEN}**oops</div>"));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let renderer = NoteRenderer::new();
        let input = "SUMMARY\nLikes *coffee*\n- a\n  - b\n\nRole: 2020 • 1 yr";
        let first = renderer.render(input);
        for _ in 0..3 {
            assert_eq!(renderer.render(input), first);
        }
        assert_eq!(render(input), first);
    }
}
