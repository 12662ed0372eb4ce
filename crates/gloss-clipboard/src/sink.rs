//! The seam between payload assembly and the platform clipboard.

use crate::{ClipboardError, ClipboardPayload};

/// Commits payloads to a clipboard.
///
/// `write_dual` is the rich path; implementations that cannot offer it
/// return [`ClipboardError::RichUnavailable`] and the writer falls back to
/// `write_text`.
pub trait ClipboardSink {
    fn write_dual(&mut self, html: &str, text: &str) -> Result<(), ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process sink for tests and headless embedding.
pub struct MemoryClipboard {
    contents: Option<ClipboardPayload>,
    rich_supported: bool,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            contents: None,
            rich_supported: true,
        }
    }

    /// A sink whose rich path always reports unavailable.
    #[must_use]
    pub fn text_only() -> Self {
        Self {
            contents: None,
            rich_supported: false,
        }
    }

    /// The last committed payload, if any. A plain-text commit stores an
    /// empty `html`.
    #[must_use]
    pub fn contents(&self) -> Option<&ClipboardPayload> {
        self.contents.as_ref()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_dual(&mut self, html: &str, text: &str) -> Result<(), ClipboardError> {
        if !self.rich_supported {
            return Err(ClipboardError::RichUnavailable(
                "memory sink is text-only".to_owned(),
            ));
        }
        self.contents = Some(ClipboardPayload {
            html: html.to_owned(),
            text: text.to_owned(),
        });
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(ClipboardPayload {
            html: String::new(),
            text: text.to_owned(),
        });
        Ok(())
    }
}
