//! Language-aware annotation for fenced code blocks.
//!
//! The annotator never parses code. It escapes the block once, then runs a
//! fixed sequence of regex passes (comments, strings, numbers, keywords,
//! builtins, call sites) over the escaped text, stashing each match behind
//! a placeholder token so later passes cannot restyle it. Unknown languages
//! come back escaped but unstyled, and diff blocks are classified per line.
//!
//! ```
//! use gloss_highlight::Highlighter;
//! use gloss_markup::Language;
//!
//! let highlighter = Highlighter::new();
//! let html = highlighter
//!     .highlight("let x = 1;", Language::Javascript)
//!     .unwrap();
//! assert!(html.contains(r#"<span class="tok-keyword">let</span>"#));
//! ```

mod engine;
mod placeholder;
mod profile;

use gloss_markup::{AnnotateError, CodeAnnotator, Language};

/// Errors surfaced by the annotation passes.
///
/// Callers degrade to the escaped, unstyled block on any of these; none of
/// them is fatal to rendering.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// A pass pattern failed to compile.
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// A stashed span never made it back into the output.
    #[error("highlight placeholder {0} was never restored")]
    UnresolvedPlaceholder(usize),
    /// Reserved control characters survived restoration.
    #[error("reserved annotation characters leaked into output")]
    TokenLeak,
}

/// Stateless annotator shared by the renderer and the clipboard pipeline.
pub struct Highlighter;

impl Highlighter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns `code` as escaped HTML with `tok-*` spans around recognised
    /// tokens. The input is raw source text; escaping happens here.
    pub fn highlight(&self, code: &str, language: Language) -> Result<String, HighlightError> {
        engine::annotate(code, language)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAnnotator for Highlighter {
    fn annotate(&self, code: &str, language: Language) -> Result<String, AnnotateError> {
        self.highlight(code, language)
            .map_err(|e| AnnotateError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use gloss_markup::Renderer;

    use super::*;

    #[test]
    fn test_annotator_wires_into_renderer() {
        let mut renderer = Renderer::new().with_annotator(Highlighter::new());
        let document = renderer.render("```js\nconst n = 2;\n```");
        let html = document.to_html();
        assert!(html.contains("<span class=\"tok-keyword\">const</span>"));
        assert!(html.contains("<span class=\"tok-number\">2</span>"));
        assert!(renderer.warnings().is_empty());
    }

    #[test]
    fn test_unknown_fence_language_stays_plain() {
        let mut renderer = Renderer::new().with_annotator(Highlighter::new());
        let document = renderer.render("```brainfuck\n+[----->+++<]\n```");
        let html = document.to_html();
        assert!(!html.contains("tok-"));
        assert!(html.contains("+[-----&gt;+++&lt;]"));
    }

    #[test]
    fn test_highlight_reports_no_errors_for_empty_input() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.highlight("", Language::Go).unwrap(), "");
    }
}
