//! Structured markup tree for model-generated review text.
//!
//! This crate turns loosely-structured Markdown into a [`Document`] tree and
//! serializes it to safe HTML. The tree is the single source of truth: code
//! annotation ([`CodeAnnotator`]), plain text extraction and clipboard
//! serialization all walk it instead of re-scanning strings, so internal
//! bookkeeping can never leak into user-visible output.
//!
//! Input comes from a generative model and is treated as hostile: fences are
//! balanced before anything else, unknown fence languages degrade to plain
//! text, malformed tables stay literal, and every repair is reported through
//! [`Renderer::warnings`].
//!
//! # Example
//!
//! ```
//! use gloss_markup::{Block, Renderer};
//!
//! let mut renderer = Renderer::new();
//! let document = renderer.render("## Findings\n\n- unused `import`\n- missing check");
//!
//! assert!(matches!(document.blocks[0], Block::Heading { level: 2, .. }));
//! assert!(document.to_html().contains("<ul>"));
//! ```

mod annotate;
mod blocks;
mod escape;
mod fence;
mod html;
mod inline;
mod language;
mod node;
mod renderer;
mod table;

pub use annotate::{AnnotateError, CodeAnnotator, annotate_code_blocks};
pub use escape::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, escape_html};
pub use language::Language;
pub use node::{Alignment, Block, CodeBlock, Document, Inline, List, ListItem, Table};
pub use renderer::Renderer;
