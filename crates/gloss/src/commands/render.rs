//! `gloss render` command implementation.

use std::path::PathBuf;

use clap::Args;
use gloss_clipboard::{ClipboardWriter, MemoryClipboard};
use gloss_highlight::Highlighter;
use gloss_markup::Renderer;

use crate::commands::{read_source, write_stdout};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (reads stdin when omitted).
    file: Option<PathBuf>,

    /// Emit self-contained styled markup instead of classed markup.
    #[arg(long)]
    styled: bool,

    /// Enable verbose output (show repair and fallback logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let markdown = read_source(self.file.as_deref())?;

        let mut renderer = Renderer::new().with_annotator(Highlighter::new());
        let document = renderer.render(&markdown);
        for warning in renderer.warnings() {
            output.warning(warning);
        }

        let html = if self.styled {
            ClipboardWriter::new(MemoryClipboard::new())
                .payload(&document, None)
                .html
        } else {
            document.to_html()
        };
        write_stdout(&html)
    }
}
