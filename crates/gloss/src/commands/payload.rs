//! `gloss payload` command implementation.

use std::path::PathBuf;

use clap::Args;
use gloss_clipboard::{ClipboardWriter, MemoryClipboard};
use gloss_markup::Renderer;

use crate::commands::{read_source, write_stdout};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the payload command.
#[derive(Args)]
pub(crate) struct PayloadArgs {
    /// Markdown file to process (reads stdin when omitted).
    file: Option<PathBuf>,

    /// Enable verbose output (show repair and fallback logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PayloadArgs {
    /// Execute the payload command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the payload cannot be
    /// serialized, or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let markdown = read_source(self.file.as_deref())?;

        let mut renderer = Renderer::new();
        let document = renderer.render(&markdown);
        for warning in renderer.warnings() {
            output.warning(warning);
        }

        let writer = ClipboardWriter::new(MemoryClipboard::new());
        let payload = writer.payload(&document, None);
        write_stdout(&serde_json::to_string_pretty(&payload)?)
    }
}
