//! Clipboard payloads for rendered review documents.
//!
//! A copy action needs two parallel representations: styled markup that
//! pastes with its look intact, and the extractor's plain text for targets
//! that only take text. [`ClipboardWriter`] builds both and commits them
//! through the [`ClipboardSink`] seam, falling back from the rich path to
//! plain text before ever reporting failure.
//!
//! ```
//! use gloss_clipboard::{ClipboardWriter, MemoryClipboard, WriteOutcome};
//! use gloss_markup::Renderer;
//!
//! let document = Renderer::new().render("**ready** to ship");
//! let mut writer = ClipboardWriter::new(MemoryClipboard::new());
//! let outcome = writer.write_rich(&document, None).unwrap();
//! assert_eq!(outcome, WriteOutcome::Rich);
//! ```

mod feedback;
mod sink;
mod style;
mod styled;
mod writer;

pub use feedback::{CopyFeedback, RevertToken};
pub use sink::{ClipboardSink, MemoryClipboard};
pub use style::{ResolvedStyle, StyleResolver, StyleTarget, Theme};
pub use writer::{ClipboardWriter, WriteOutcome};

/// Both clipboard representations of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipboardPayload {
    pub html: String,
    pub text: String,
}

/// Errors from clipboard commits.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The sink has no rich path.
    #[error("rich clipboard unavailable: {0}")]
    RichUnavailable(String),
    /// The commit itself failed.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}
