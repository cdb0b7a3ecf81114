//! `notemark highlight` command implementation.

use clap::Args;
use notemark_config::CliSettings;

use super::{CommonArgs, highlighter_from_config, write_html};
use crate::error::CliError;

/// Arguments for the highlight command.
#[derive(Args)]
pub(crate) struct HighlightArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Search term to highlight (case-insensitive, literal).
    #[arg(short, long)]
    query: String,

    /// Inline CSS for `<mark>` elements (overrides config).
    #[arg(long)]
    style: Option<String>,
}

impl HighlightArgs {
    /// Execute the highlight command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            highlight_style: self.style,
            ..Default::default()
        };
        let config = self.common.load_config(&settings)?;
        let text = self.common.read_input()?;

        let html = highlighter_from_config(&config).highlight(search_text(&text), &self.query);
        write_html(&html)
    }
}

/// Strip trailing line endings; search results are single-line names and snippets.
fn search_text(input: &str) -> &str {
    input.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_search_text_strips_line_endings() {
        assert_eq!(search_text("Ann Lee\n"), "Ann Lee");
        assert_eq!(search_text("Ann Lee\r\n"), "Ann Lee");
        assert_eq!(search_text("Ann Lee\r\n\r\n"), "Ann Lee");
    }

    #[test]
    fn test_search_text_keeps_inner_lines() {
        assert_eq!(search_text("a\r\nb\n"), "a\r\nb");
    }
}
