//! CLI command implementations.

mod highlight;
mod render;
mod synthesis;

pub(crate) use highlight::HighlightArgs;
pub(crate) use render::RenderArgs;
pub(crate) use synthesis::SynthesisArgs;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use notemark_config::{CliSettings, Config};
use notemark_renderer::{Highlighter, NoteRenderer, RenderOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Input file (default: stdin; `-` also reads stdin).
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover notemark.toml).
    #[arg(short, long, env = "NOTEMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rendering overrides for commands that render notes.
#[derive(Args)]
pub(crate) struct RenderTuning {
    /// Lines shorter than this may be shown as headers (overrides config).
    #[arg(long)]
    header_max_len: Option<usize>,

    /// Left margin in em per bullet indent character (overrides config).
    #[arg(long)]
    indent_em: Option<f64>,
}

impl RenderTuning {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            header_max_len: self.header_max_len,
            indent_em: self.indent_em,
            ..Default::default()
        }
    }
}

impl CommonArgs {
    /// Load configuration with the given overrides applied.
    fn load_config(&self, settings: &CliSettings) -> Result<Config, CliError> {
        let config = Config::load(self.config.as_deref(), Some(settings))?;
        if self.verbose {
            let source = config
                .config_path
                .as_ref()
                .map_or_else(|| "defaults".to_owned(), |p| p.display().to_string());
            Output::new().info(&format!("Configuration: {source}"));
        }
        Ok(config)
    }

    /// Read the input file, or stdin when none was given.
    fn read_input(&self) -> Result<String, CliError> {
        read_input(self.input.as_deref())
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::info!(path = %path.display(), "Reading input");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write an HTML fragment followed by a newline to stdout.
fn write_html(html: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

/// Build a note renderer from loaded configuration.
fn renderer_from_config(config: &Config) -> NoteRenderer {
    NoteRenderer::with_options(RenderOptions {
        header_max_len: config.render.header_max_len,
        indent_em: config.render.indent_em,
    })
}

/// Build a search highlighter from loaded configuration.
fn highlighter_from_config(config: &Config) -> Highlighter {
    Highlighter::new().with_style(config.highlight.style.clone())
}
