//! notemark CLI - contact note renderer.
//!
//! Provides commands for:
//! - `render`: Render a note to an HTML fragment
//! - `synthesis`: Render categorized synthesis results from JSON
//! - `highlight`: Highlight a search term in plain text

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{HighlightArgs, RenderArgs, SynthesisArgs};
use output::Output;

/// notemark - Contact note renderer.
#[derive(Parser)]
#[command(name = "notemark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a note to an HTML fragment.
    Render(RenderArgs),
    /// Render synthesis results (JSON array of category/content pairs).
    Synthesis(SynthesisArgs),
    /// Highlight a search term in text.
    Highlight(HighlightArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Render(args) => args.common.verbose,
            Self::Synthesis(args) => args.common.verbose,
            Self::Highlight(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
    // Logs go to stderr so stdout carries only HTML.
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Synthesis(args) => args.execute(),
        Commands::Highlight(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
