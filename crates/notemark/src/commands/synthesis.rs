//! `notemark synthesis` command implementation.

use clap::Args;
use notemark_renderer::{SynthesisEntry, render_synthesis};

use super::{CommonArgs, RenderTuning, renderer_from_config, write_html};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the synthesis command.
#[derive(Args)]
pub(crate) struct SynthesisArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    tuning: RenderTuning,
}

impl SynthesisArgs {
    /// Execute the synthesis command.
    ///
    /// Input is a JSON array of `{"category": ..., "content": ...}` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, input cannot be read,
    /// or the input is not valid synthesis JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.common.load_config(&self.tuning.cli_settings())?;
        let json = self.common.read_input()?;
        let entries = parse_entries(&json)?;

        if entries.is_empty() {
            Output::new().warning("No categories in synthesis input");
        }
        tracing::info!(categories = entries.len(), "Rendering synthesis");

        let html = render_synthesis(&renderer_from_config(&config), &entries);
        write_html(&html)
    }
}

/// Parse synthesis JSON; blank input counts as no entries.
fn parse_entries(json: &str) -> Result<Vec<SynthesisEntry>, CliError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_entries() {
        let entries = parse_entries(
            r#"[{"category": "work_history", "content": "- Acme"}, {"category": "family", "content": ""}]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![
                SynthesisEntry::new("work_history", "- Acme"),
                SynthesisEntry::new("family", ""),
            ]
        );
    }

    #[test]
    fn test_parse_entries_blank_input() {
        assert!(parse_entries("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_entries_invalid_json() {
        let err = parse_entries(r#"{"category": "x"}"#).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
        assert!(err.to_string().starts_with("Invalid synthesis JSON"));
    }
}
