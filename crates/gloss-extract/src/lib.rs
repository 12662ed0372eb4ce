//! Plain-text extraction from rendered documents.
//!
//! Extraction is the inverse of rendering for everything a paste target
//! can represent: headings, emphasis, lists and tables come back in
//! canonical Markdown, and code blocks come back fenced with their
//! canonical language tag. Annotation spans never appear; extraction reads
//! the raw code text, not the annotated HTML.
//!
//! ```
//! use gloss_extract::extract;
//! use gloss_markup::Renderer;
//!
//! let mut renderer = Renderer::new();
//! let document = renderer.render("# Title\n\nSome **bold** text.");
//! assert_eq!(extract(&document), "# Title\n\nSome **bold** text.");
//! ```

use std::sync::LazyLock;

use gloss_markup::{Alignment, Block, Document, Inline, List, Table};
use regex::Regex;

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Renders `document` as plain text with canonical Markdown markers.
///
/// Blocks are separated by one blank line; longer runs of blank lines are
/// collapsed and the result is trimmed.
#[must_use]
pub fn extract(document: &Document) -> String {
    let parts: Vec<String> = document.blocks.iter().map(extract_block).collect();
    let joined = parts.join("\n\n");
    BLANK_RUN.replace_all(&joined, "\n\n").trim().to_owned()
}

/// Renders a single block as plain text.
#[must_use]
pub fn extract_block(block: &Block) -> String {
    match block {
        Block::Paragraph(content) => extract_inlines(content),
        Block::Heading { level, content } => {
            format!(
                "{} {}",
                "#".repeat(usize::from(*level)),
                extract_inlines(content)
            )
        }
        Block::Quote(content) => {
            let text = extract_inlines(content);
            let lines: Vec<String> = text
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        ">".to_owned()
                    } else {
                        format!("> {line}")
                    }
                })
                .collect();
            lines.join("\n")
        }
        Block::Code(code) => {
            let tag = code.language.fence_tag().unwrap_or("");
            format!("```{tag}\n{}\n```", code.code)
        }
        Block::Table(table) => extract_table(table),
        Block::List(list) => extract_list(list, 0),
    }
}

fn extract_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(format_row(&table.header));
    lines.push(separator_row(&table.alignments));
    for row in &table.rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

fn format_row(cells: &[Vec<Inline>]) -> String {
    let rendered: Vec<String> = cells.iter().map(|cell| extract_inlines(cell)).collect();
    format!("| {} |", rendered.join(" | "))
}

fn separator_row(alignments: &[Alignment]) -> String {
    let markers: Vec<&str> = alignments
        .iter()
        .map(|alignment| match alignment {
            Alignment::Left => "---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        })
        .collect();
    format!("| {} |", markers.join(" | "))
}

fn extract_list(list: &List, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let mut lines = Vec::with_capacity(list.items.len());
    let mut number = list.start;
    for item in &list.items {
        let content = extract_inlines(&item.content);
        if list.ordered {
            lines.push(format!("{indent}{number}. {content}"));
        } else {
            lines.push(format!("{indent}- {content}"));
        }
        if let Some(nested) = &item.nested {
            lines.push(extract_list(nested, depth + 1));
        }
        number = number.saturating_add(1);
    }
    lines.join("\n")
}

fn extract_inlines(content: &[Inline]) -> String {
    let mut out = String::new();
    for inline in content {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Code(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            Inline::Strong(inner) => {
                out.push_str("**");
                out.push_str(&extract_inlines(inner));
                out.push_str("**");
            }
            Inline::Emphasis(inner) => {
                out.push('*');
                out.push_str(&extract_inlines(inner));
                out.push('*');
            }
            Inline::LineBreak => out.push('\n'),
        }
    }
    out
}
