//! `notemark render` command implementation.

use clap::Args;

use super::{CommonArgs, RenderTuning, renderer_from_config, write_html};
use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    tuning: RenderTuning,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.common.load_config(&self.tuning.cli_settings())?;
        let text = self.common.read_input()?;

        let html = renderer_from_config(&config).render(&text);
        write_html(&html)
    }
}
