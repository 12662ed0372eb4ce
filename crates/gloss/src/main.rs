//! Gloss CLI - review markup pipeline.
//!
//! Provides commands for:
//! - `render`: Markdown to markup
//! - `extract`: render then recover plain text
//! - `payload`: dual-format clipboard payload as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExtractArgs, PayloadArgs, RenderArgs};
use output::Output;

/// Gloss - review markup pipeline.
#[derive(Parser)]
#[command(name = "gloss", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to markup.
    Render(RenderArgs),
    /// Render Markdown, then extract its plain text.
    Extract(ExtractArgs),
    /// Emit the dual-format clipboard payload as JSON.
    Payload(PayloadArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Extract(args) => args.verbose,
        Commands::Payload(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
        Commands::Payload(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
