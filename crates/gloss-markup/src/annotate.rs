//! Code annotation seam.
//!
//! Rendering and highlighting are separate concerns: the renderer builds the
//! tree, an annotator turns raw code into annotated markup. The orchestrator
//! owns the "already annotated" decision via the node flag, so annotators
//! never have to inspect their own output.

use crate::language::Language;
use crate::node::{Block, Document};

/// Produces annotated HTML for a code block.
///
/// Implementations receive the raw source and are responsible for escaping
/// it. The returned markup is embedded verbatim inside `<pre><code>`.
pub trait CodeAnnotator {
    fn annotate(&self, code: &str, language: Language) -> Result<String, AnnotateError>;
}

/// Error raised by a [`CodeAnnotator`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AnnotateError {
    message: String,
}

impl AnnotateError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Annotate every unannotated code block in the document.
///
/// Each block is visited at most once across any number of calls: the
/// `highlighted` flag is set after the first attempt, successful or not, so
/// running the orchestrator twice is a no-op. A failed annotation leaves the
/// block rendering as escaped plain text and is reported as a warning;
/// it never affects the rest of the document.
pub fn annotate_code_blocks(document: &mut Document, annotator: &dyn CodeAnnotator) -> Vec<String> {
    let mut warnings = Vec::new();
    for block in &mut document.blocks {
        let Block::Code(code) = block else {
            continue;
        };
        if code.highlighted {
            continue;
        }
        match annotator.annotate(&code.code, code.language) {
            Ok(html) => code.html = Some(html),
            Err(e) => {
                tracing::warn!(
                    language = code.language.as_str(),
                    error = %e,
                    "code annotation failed, leaving block as plain text"
                );
                warnings.push(format!(
                    "annotation failed for {} code block: {e}",
                    code.language.as_str()
                ));
            }
        }
        code.highlighted = true;
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::node::CodeBlock;

    static_assertions::assert_obj_safe!(CodeAnnotator);

    struct Upper;

    impl CodeAnnotator for Upper {
        fn annotate(&self, code: &str, _language: Language) -> Result<String, AnnotateError> {
            Ok(code.to_uppercase())
        }
    }

    struct Failing;

    impl CodeAnnotator for Failing {
        fn annotate(&self, _code: &str, _language: Language) -> Result<String, AnnotateError> {
            Err(AnnotateError::new("boom"))
        }
    }

    struct Counting {
        calls: Cell<usize>,
    }

    impl CodeAnnotator for Counting {
        fn annotate(&self, code: &str, _language: Language) -> Result<String, AnnotateError> {
            self.calls.set(self.calls.get() + 1);
            Ok(code.to_owned())
        }
    }

    fn doc_with_code() -> Document {
        Document {
            blocks: vec![Block::Code(CodeBlock::new(Language::Rust, "fn x() {}"))],
        }
    }

    #[test]
    fn test_annotates_and_sets_flag() {
        let mut doc = doc_with_code();
        let warnings = annotate_code_blocks(&mut doc, &Upper);
        assert!(warnings.is_empty());

        let Block::Code(code) = &doc.blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.html.as_deref(), Some("FN X() {}"));
        assert!(code.highlighted);
    }

    #[test]
    fn test_second_pass_is_noop() {
        let counting = Counting {
            calls: Cell::new(0),
        };
        let mut doc = doc_with_code();
        annotate_code_blocks(&mut doc, &counting);
        annotate_code_blocks(&mut doc, &counting);
        assert_eq!(counting.calls.get(), 1);
    }

    #[test]
    fn test_failure_degrades_to_plain_text() {
        let mut doc = doc_with_code();
        let warnings = annotate_code_blocks(&mut doc, &Failing);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("boom"));

        let Block::Code(code) = &doc.blocks[0] else {
            panic!("expected code block");
        };
        assert!(code.html.is_none());
        assert!(code.highlighted);
        // output falls back to the escaped source
        assert!(doc.to_html().contains("fn x() {}"));
    }

    #[test]
    fn test_failure_does_not_block_other_blocks() {
        struct FailRust;

        impl CodeAnnotator for FailRust {
            fn annotate(&self, code: &str, language: Language) -> Result<String, AnnotateError> {
                if language == Language::Rust {
                    Err(AnnotateError::new("no rust"))
                } else {
                    Ok(code.to_owned())
                }
            }
        }

        let mut doc = Document {
            blocks: vec![
                Block::Code(CodeBlock::new(Language::Rust, "fn x() {}")),
                Block::Code(CodeBlock::new(Language::Python, "print(1)")),
            ],
        };
        let warnings = annotate_code_blocks(&mut doc, &FailRust);
        assert_eq!(warnings.len(), 1);

        let Block::Code(python) = &doc.blocks[1] else {
            panic!("expected code block");
        };
        assert_eq!(python.html.as_deref(), Some("print(1)"));
    }
}
