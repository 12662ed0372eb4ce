//! Markdown rendering entry point.

use crate::annotate::{CodeAnnotator, annotate_code_blocks};
use crate::blocks::parse_text_segment;
use crate::escape::escape_html;
use crate::fence::{self, Segment};
use crate::language::Language;
use crate::node::{Block, CodeBlock, Document};

/// Renders model-generated Markdown into a [`Document`].
///
/// Input is never trusted to be well formed: fences are balanced, empty
/// code blocks dropped, stray fence markers deleted and malformed tables
/// left as literal text. Rendering never fails; every repair is recorded
/// in [`warnings`](Self::warnings).
///
/// # Example
///
/// ```
/// use gloss_markup::Renderer;
///
/// let mut renderer = Renderer::new();
/// let document = renderer.render("# Review\n\nPrefer `map` here.");
/// assert!(document.to_html().starts_with("<h1>Review</h1>"));
/// ```
pub struct Renderer {
    annotator: Option<Box<dyn CodeAnnotator>>,
    warnings: Vec<String>,
}

impl Renderer {
    /// Create a renderer without a code annotator; code blocks render as
    /// escaped plain text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            annotator: None,
            warnings: Vec::new(),
        }
    }

    /// Set the annotator applied to code blocks after parsing.
    #[must_use]
    pub fn with_annotator<A: CodeAnnotator + 'static>(mut self, annotator: A) -> Self {
        self.annotator = Some(Box::new(annotator));
        self
    }

    /// Render a Markdown string into a document tree.
    pub fn render(&mut self, markdown: &str) -> Document {
        self.warnings.clear();

        let mut source = markdown.to_owned();
        if fence::balance(&mut source) {
            tracing::warn!("unterminated code fence, appended closing fence");
            self.warnings
                .push("unterminated code fence, appended closing fence".to_owned());
        }

        let mut blocks = Vec::new();
        for segment in fence::split_segments(&source) {
            match segment {
                Segment::Code { info, code } => self.push_code_block(&mut blocks, &info, code),
                Segment::Text(text) => {
                    blocks.extend(parse_text_segment(&text, &mut self.warnings));
                }
            }
        }

        let mut document = Document { blocks };
        if let Some(annotator) = &self.annotator {
            let warnings = annotate_code_blocks(&mut document, annotator.as_ref());
            self.warnings.extend(warnings);
        }
        document
    }

    fn push_code_block(&mut self, blocks: &mut Vec<Block>, info: &str, code: String) {
        if escape_html(&code).trim().is_empty() {
            tracing::warn!("dropped empty code block");
            self.warnings.push("dropped empty code block".to_owned());
            return;
        }

        let tag = info.split_whitespace().next().unwrap_or("");
        let language = if tag.is_empty() {
            Language::Plain
        } else {
            Language::parse(tag).unwrap_or_else(|| {
                tracing::warn!(language = tag, "unknown code fence language, rendering as plain text");
                self.warnings
                    .push(format!("unknown code fence language: {tag}"));
                Language::Plain
            })
        };
        blocks.push(Block::Code(CodeBlock::new(language, code)));
    }

    /// Repairs and degradations recorded by the most recent render.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
