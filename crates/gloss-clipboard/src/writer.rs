//! Payload assembly and the dual-write fallback chain.

use gloss_markup::Document;

use crate::sink::ClipboardSink;
use crate::style::{StyleResolver, Theme};
use crate::styled::styled_html;
use crate::{ClipboardError, ClipboardPayload};

/// How a write ended up on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Both representations committed.
    Rich,
    /// The rich path failed; plain text committed instead.
    TextFallback,
}

/// Serializes documents and commits them through a [`ClipboardSink`].
pub struct ClipboardWriter {
    sink: Box<dyn ClipboardSink>,
    resolver: Box<dyn StyleResolver>,
}

impl ClipboardWriter {
    pub fn new(sink: impl ClipboardSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            resolver: Box::new(Theme::new()),
        }
    }

    /// Replaces the built-in [`Theme`] resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl StyleResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Builds both representations without committing them.
    ///
    /// `plain` overrides the extracted text; pass `None` to derive it from
    /// the document.
    #[must_use]
    pub fn payload(&self, document: &Document, plain: Option<&str>) -> ClipboardPayload {
        let html = styled_html(document, self.resolver.as_ref());
        let text = plain.map_or_else(|| gloss_extract::extract(document), ToOwned::to_owned);
        ClipboardPayload { html, text }
    }

    /// Commits `document` in both formats, falling back to plain text when
    /// the sink cannot take the rich form. A failure of the fallback too is
    /// returned to the caller; a copy must never silently do nothing.
    pub fn write_rich(
        &mut self,
        document: &Document,
        plain: Option<&str>,
    ) -> Result<WriteOutcome, ClipboardError> {
        let payload = self.payload(document, plain);
        match self.sink.write_dual(&payload.html, &payload.text) {
            Ok(()) => Ok(WriteOutcome::Rich),
            Err(error) => {
                tracing::warn!(error = %error, "rich clipboard write failed, falling back to plain text");
                self.sink.write_text(&payload.text)?;
                Ok(WriteOutcome::TextFallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloss_markup::Renderer;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sink::MemoryClipboard;

    /// Sink handle the test can still inspect after the writer takes it.
    struct SharedSink(Rc<RefCell<MemoryClipboard>>);

    impl ClipboardSink for SharedSink {
        fn write_dual(&mut self, html: &str, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().write_dual(html, text)
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().write_text(text)
        }
    }

    struct Broken;

    impl ClipboardSink for Broken {
        fn write_dual(&mut self, _html: &str, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::RichUnavailable("no rich path".to_owned()))
        }

        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::WriteFailed("device gone".to_owned()))
        }
    }

    fn render(markdown: &str) -> Document {
        Renderer::new().render(markdown)
    }

    #[test]
    fn test_rich_write_commits_both_formats() {
        let shared = Rc::new(RefCell::new(MemoryClipboard::new()));
        let mut writer = ClipboardWriter::new(SharedSink(Rc::clone(&shared)));
        let document = render("**done**");

        let outcome = writer.write_rich(&document, None).unwrap();
        assert_eq!(outcome, WriteOutcome::Rich);

        let sink = shared.borrow();
        let payload = sink.contents().unwrap();
        assert!(payload.html.contains("<strong>done</strong>"));
        assert_eq!(payload.text, "**done**");
    }

    #[test]
    fn test_text_only_sink_falls_back() {
        let shared = Rc::new(RefCell::new(MemoryClipboard::text_only()));
        let mut writer = ClipboardWriter::new(SharedSink(Rc::clone(&shared)));
        let document = render("- A\n- B");

        let outcome = writer.write_rich(&document, None).unwrap();
        assert_eq!(outcome, WriteOutcome::TextFallback);

        let sink = shared.borrow();
        let payload = sink.contents().unwrap();
        assert_eq!(payload.html, "");
        assert_eq!(payload.text, "- A\n- B");
    }

    #[test]
    fn test_total_failure_propagates() {
        let mut writer = ClipboardWriter::new(Broken);
        let document = render("text");
        let result = writer.write_rich(&document, None);
        assert!(matches!(result, Err(ClipboardError::WriteFailed(_))));
    }

    #[test]
    fn test_caller_text_overrides_extraction() {
        let writer = ClipboardWriter::new(MemoryClipboard::new());
        let document = render("# Heading");
        let payload = writer.payload(&document, Some("custom text"));
        assert_eq!(payload.text, "custom text");
        assert!(payload.html.contains("<h1"));
    }

    #[test]
    fn test_payload_text_matches_extractor() {
        let writer = ClipboardWriter::new(MemoryClipboard::new());
        let document = render("1. first\n2. second");
        let payload = writer.payload(&document, None);
        assert_eq!(payload.text, "1. first\n2. second");
    }
}
