//! Text segment parsing: headings, quotes, lists, tables and paragraphs.
//!
//! Operates line by line on the text between code fences. A pipe row only
//! becomes a table when the next line is a separator row; otherwise it stays
//! literal paragraph text.

use crate::inline::parse_inlines;
use crate::node::{Alignment, Block, Inline, List, ListItem, Table};
use crate::table;

/// Parse one text segment into block nodes.
pub(crate) fn parse_text_segment(text: &str, warnings: &mut Vec<String>) -> Vec<Block> {
    let cleaned = strip_stray_fences(text, warnings);
    let lines: Vec<&str> = cleaned.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        match classify(lines[i]) {
            LineKind::Blank => i += 1,
            LineKind::Heading { level, rest } => {
                blocks.push(Block::Heading {
                    level,
                    content: parse_inlines(rest),
                });
                i += 1;
            }
            LineKind::Quote(_) => {
                let mut content = Vec::new();
                while i < lines.len() {
                    let LineKind::Quote(rest) = classify(lines[i]) else {
                        break;
                    };
                    if !content.is_empty() {
                        content.push(Inline::LineBreak);
                    }
                    content.extend(parse_inlines(rest));
                    i += 1;
                }
                blocks.push(Block::Quote(content));
            }
            LineKind::Item(_) => {
                let mut items = Vec::new();
                while i < lines.len() {
                    let LineKind::Item(item) = classify(lines[i]) else {
                        break;
                    };
                    items.push(item);
                    i += 1;
                }
                let mut j = 0;
                while j < items.len() {
                    let (list, consumed) = build_list(&items[j..]);
                    blocks.push(Block::List(list));
                    j += consumed;
                }
            }
            LineKind::TableCandidate if starts_table(&lines, i) => {
                let (block, consumed) = parse_table(&lines[i..], warnings);
                blocks.push(block);
                i += consumed;
            }
            LineKind::TableCandidate | LineKind::Text => {
                let mut content = Vec::new();
                while i < lines.len() {
                    match classify(lines[i]) {
                        LineKind::Text => {}
                        LineKind::TableCandidate if !starts_table(&lines, i) => {}
                        _ => break,
                    }
                    if !content.is_empty() {
                        content.push(Inline::LineBreak);
                    }
                    content.extend(parse_inlines(lines[i].trim()));
                    i += 1;
                }
                blocks.push(Block::Paragraph(content));
            }
        }
    }
    blocks
}

/// Remove runs of three or more backticks from text.
///
/// Full-line fences were consumed during segmentation; whatever backtick
/// runs survive here are malformed leftovers and never render literally.
fn strip_stray_fences(text: &str, warnings: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    let mut removed = 0usize;
    for ch in text.chars() {
        if ch == '`' {
            run += 1;
            continue;
        }
        flush_backticks(&mut out, &mut run, &mut removed);
        out.push(ch);
    }
    flush_backticks(&mut out, &mut run, &mut removed);

    if removed > 0 {
        tracing::warn!(count = removed, "removed stray code fence markers");
        warnings.push(format!("removed {removed} stray code fence markers"));
    }
    out
}

fn flush_backticks(out: &mut String, run: &mut usize, removed: &mut usize) {
    if *run >= 3 {
        *removed += 1;
    } else {
        for _ in 0..*run {
            out.push('`');
        }
    }
    *run = 0;
}

enum LineKind<'a> {
    Blank,
    Heading { level: u8, rest: &'a str },
    Quote(&'a str),
    Item(ListLine<'a>),
    TableCandidate,
    Text,
}

/// Deepest nesting level an item can take; deeper indents clamp here and
/// parse as siblings of the deepest list.
const MAX_LIST_DEPTH: usize = 64;

struct ListLine<'a> {
    /// Nesting depth, two spaces of indent per level.
    level: usize,
    ordered: bool,
    number: u64,
    rest: &'a str,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some((level, rest)) = heading_line(trimmed) {
        return LineKind::Heading { level, rest };
    }
    if let Some(rest) = quote_line(trimmed) {
        return LineKind::Quote(rest);
    }
    let spaces = line.chars().take_while(|&c| c == ' ').count();
    if let Some(item) = item_line(trimmed, (spaces / 2).min(MAX_LIST_DEPTH)) {
        return LineKind::Item(item);
    }
    if table::is_candidate(trimmed) {
        return LineKind::TableCandidate;
    }
    LineKind::Text
}

fn heading_line(trimmed: &str) -> Option<(u8, &str)> {
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = trimmed[hashes..].strip_prefix(' ')?;
    Some((u8::try_from(hashes).unwrap_or(1), rest))
}

fn quote_line(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

fn item_line(trimmed: &str, level: usize) -> Option<ListLine<'_>> {
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Some(ListLine {
            level,
            ordered: false,
            number: 1,
            rest,
        });
    }
    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix(". ")?;
    let number = trimmed[..digits].parse().ok()?;
    Some(ListLine {
        level,
        ordered: true,
        number,
        rest,
    })
}

fn starts_table(lines: &[&str], i: usize) -> bool {
    matches!(classify(lines[i]), LineKind::TableCandidate)
        && lines.get(i + 1).is_some_and(|next| table::is_separator_row(next))
}

/// Parse a table starting at a header row with a separator row below it.
///
/// The header defines the width: short data rows are padded with empty
/// cells, wide ones lose their extra cells.
fn parse_table(lines: &[&str], warnings: &mut Vec<String>) -> (Block, usize) {
    let header_cells = table::parse_row(lines[0]);
    let width = header_cells.len();

    let mut alignments: Vec<Alignment> = table::parse_row(lines[1])
        .iter()
        .map(|cell| table::parse_alignment(cell))
        .collect();
    alignments.resize(width, Alignment::Left);

    let header = header_cells
        .iter()
        .map(|cell| parse_inlines(cell))
        .collect();

    let mut rows = Vec::new();
    let mut consumed = 2;
    while consumed < lines.len() {
        let line = lines[consumed];
        if !matches!(classify(line), LineKind::TableCandidate) {
            break;
        }
        let mut cells = table::parse_row(line);
        if cells.len() > width {
            tracing::warn!(
                found = cells.len(),
                expected = width,
                "table row wider than header, dropping extra cells"
            );
            warnings.push(format!(
                "table row has {} cells, header has {width}; extra cells dropped",
                cells.len()
            ));
            cells.truncate(width);
        }
        while cells.len() < width {
            cells.push(String::new());
        }
        rows.push(cells.iter().map(|cell| parse_inlines(cell)).collect());
        consumed += 1;
    }

    (
        Block::Table(Table {
            alignments,
            header,
            rows,
        }),
        consumed,
    )
}

/// Build one list from consecutive item lines, recursing on deeper indents.
///
/// Stops at a shallower item or at a same-level item of the other kind.
/// Returns the list and the number of lines consumed.
fn build_list(items: &[ListLine<'_>]) -> (List, usize) {
    let level = items[0].level;
    let ordered = items[0].ordered;
    let start = if ordered { items[0].number } else { 1 };
    let mut list_items: Vec<ListItem> = Vec::new();
    let mut i = 0;

    while i < items.len() {
        let item = &items[i];
        if item.level < level {
            break;
        }
        if item.level == level {
            if item.ordered != ordered {
                break;
            }
            list_items.push(ListItem::new(parse_inlines(item.rest)));
            i += 1;
        } else {
            let (nested, consumed) = build_list(&items[i..]);
            attach_nested(&mut list_items, nested);
            i += consumed;
        }
    }

    (
        List {
            ordered,
            start,
            items: list_items,
        },
        i,
    )
}

fn attach_nested(items: &mut Vec<ListItem>, nested: List) {
    if let Some(last) = items.last_mut() {
        if let Some(existing) = &mut last.nested {
            existing.items.extend(nested.items);
        } else {
            last.nested = Some(nested);
        }
    } else {
        // deep item with no parent: hang it off a synthetic empty item
        items.push(ListItem {
            content: Vec::new(),
            nested: Some(nested),
        });
    }
}
