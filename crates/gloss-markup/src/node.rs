//! Structured content tree.
//!
//! Rendering parses Markdown once into this tree; every later stage
//! (annotation, HTML serialization, plain text extraction, clipboard
//! payloads) walks the tree instead of re-scanning strings.

use crate::language::Language;

/// A parsed document: the root of the structured content tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Iterate over all code blocks in document order.
    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Code(code) => Some(code),
            _ => None,
        })
    }
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    Quote(Vec<Inline>),
    Code(CodeBlock),
    Table(Table),
    List(List),
}

/// An inline node within a block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inline {
    /// Raw text. Escaped at serialization time, never earlier.
    Text(String),
    /// Inline code span. Outer whitespace is trimmed at parse time.
    Code(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    LineBreak,
}

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlock {
    pub language: Language,
    /// Raw source exactly as it appeared between the fences.
    pub code: String,
    /// Annotated markup produced by a [`CodeAnnotator`](crate::CodeAnnotator).
    /// None means the block serializes as escaped plain text.
    pub html: Option<String>,
    /// Set once by [`annotate_code_blocks`](crate::annotate_code_blocks);
    /// annotated blocks are skipped on later passes.
    pub highlighted: bool,
}

impl CodeBlock {
    /// Create an unannotated code block.
    #[must_use]
    pub fn new(language: Language, code: impl Into<String>) -> Self {
        Self {
            language,
            code: code.into(),
            html: None,
            highlighted: false,
        }
    }
}

/// Horizontal cell alignment, parsed from the table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A pipe table.
///
/// The header row defines the table width: `alignments.len()` always equals
/// `header.len()`, and every data row holds exactly that many cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub alignments: Vec<Alignment>,
    pub header: Vec<Vec<Inline>>,
    pub rows: Vec<Vec<Vec<Inline>>>,
}

impl Table {
    /// Number of columns, as defined by the header row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// An ordered or unordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    pub ordered: bool,
    /// First item number for ordered lists; unused for unordered lists.
    pub start: u64,
    pub items: Vec<ListItem>,
}

/// A single list item, optionally carrying a nested sublist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    pub content: Vec<Inline>,
    pub nested: Option<List>,
}

impl ListItem {
    /// Create a leaf item with no sublist.
    #[must_use]
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
            content,
            nested: None,
        }
    }
}
