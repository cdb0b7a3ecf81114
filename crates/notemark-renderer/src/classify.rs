//! Structural classification of plain (non-bullet) lines.
//!
//! Synthesized category content tends to mix section labels, employment
//! history lines and free text. These heuristics pick a block style for each
//! line. They are best-effort: a short all-caps sentence followed by more text
//! will be shown as a header.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::inline::inline;

/// `Title: Date range • Duration`.
static JOB_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]+):\s*([^•]+?)\s*•\s*(.+)$").unwrap());

const HEADER_STYLE: &str = "display: block; margin: 0.75em 0 0.25em;";
const BLOCK_STYLE: &str = "margin: 0.25em 0;";

/// Block kind chosen for a trimmed, non-blank, non-bullet line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Section label such as `Work History:` or `EDUCATION`.
    Header(&'a str),
    /// Employment line split into its three parts.
    JobTitle {
        title: &'a str,
        dates: &'a str,
        duration: &'a str,
    },
    /// Anything else.
    Text(&'a str),
}

/// Classify a trimmed line.
///
/// `next` is the raw line that follows, if any. A line counts as short when
/// it has fewer than `header_max_len` characters.
///
/// # Examples
///
/// ```
/// use notemark_renderer::{LineKind, classify_line};
///
/// assert_eq!(classify_line("Skills:", None, 60), LineKind::Header("Skills:"));
/// assert_eq!(
///     classify_line("Engineer: 2019 - 2022 • 3 yrs", None, 60),
///     LineKind::JobTitle { title: "Engineer", dates: "2019 - 2022", duration: "3 yrs" }
/// );
/// assert_eq!(classify_line("Met at the conference.", None, 60), LineKind::Text("Met at the conference."));
/// ```
#[must_use]
pub fn classify_line<'a>(line: &'a str, next: Option<&str>, header_max_len: usize) -> LineKind<'a> {
    let short = line.chars().count() < header_max_len;
    let next_has_content = next.is_some_and(|l| !l.trim().is_empty());

    if short && (line.ends_with(':') || (is_all_caps(line) && next_has_content)) {
        return LineKind::Header(line);
    }

    if let Some(caps) = JOB_TITLE_PATTERN.captures(line) {
        let title = caps.get(1).map_or("", |m| m.as_str().trim());
        let dates = caps.get(2).map_or("", |m| m.as_str().trim());
        let duration = caps.get(3).map_or("", |m| m.as_str().trim());
        if !title.is_empty() && !dates.is_empty() && !duration.is_empty() {
            return LineKind::JobTitle {
                title,
                dates,
                duration,
            };
        }
    }

    LineKind::Text(line)
}

/// True when the line has cased letters and none of them are lowercase.
fn is_all_caps(line: &str) -> bool {
    let mut cased = line
        .chars()
        .filter(|c| c.is_uppercase() || c.is_lowercase())
        .peekable();
    cased.peek().is_some() && cased.all(char::is_uppercase)
}

impl LineKind<'_> {
    /// Append the HTML block for this line.
    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::Header(text) => {
                write!(out, r#"<strong style="{HEADER_STYLE}">{}</strong>"#, inline(text)).unwrap();
            }
            Self::JobTitle {
                title,
                dates,
                duration,
            } => {
                write!(
                    out,
                    r#"<div class="job-entry" style="{BLOCK_STYLE}"><strong>{}</strong>: {} <span class="job-duration">• {}</span></div>"#,
                    inline(title),
                    inline(dates),
                    inline(duration)
                )
                .unwrap();
            }
            Self::Text(text) => {
                write!(out, r#"<div style="{BLOCK_STYLE}">{}</div>"#, inline(text)).unwrap();
            }
        }
    }
}
