//! Inline span parsing: code spans, bold and italic.
//!
//! Code spans are opaque and bind tightest. Emphasis delimiters must sit
//! against non-whitespace on the inside, so `2 * 3 * 4` stays literal.
//! Unmatched markers always fall back to literal text. Underscore emphasis
//! is deliberately not recognized: model output is full of `snake_case`
//! identifiers.

use crate::node::Inline;

/// Parse a single line of text into inline nodes.
pub(crate) fn parse_inlines(text: &str) -> Vec<Inline> {
    let chars: Vec<char> = text.chars().collect();
    parse_span(&chars)
}

fn parse_span(chars: &[char]) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                if let Some(close) = find_char(chars, i + 1, '`') {
                    if close > i + 1 {
                        flush(&mut buf, &mut out);
                        let content: String = chars[i + 1..close].iter().collect();
                        out.push(Inline::Code(content.trim().to_owned()));
                        i = close + 1;
                        continue;
                    }
                    // empty span stays literal
                    buf.push_str("``");
                    i = close + 1;
                    continue;
                }
                buf.push('`');
                i += 1;
            }
            '*' => {
                let strong = chars.get(i + 1) == Some(&'*');
                let delim_len = if strong { 2 } else { 1 };
                if let Some(close) = find_closer(chars, i + delim_len, strong) {
                    let inner = &chars[i + delim_len..close];
                    if has_solid_edges(inner) {
                        flush(&mut buf, &mut out);
                        let children = parse_span(inner);
                        out.push(if strong {
                            Inline::Strong(children)
                        } else {
                            Inline::Emphasis(children)
                        });
                        i = close + delim_len;
                        continue;
                    }
                }
                for _ in 0..delim_len {
                    buf.push('*');
                }
                i += delim_len;
            }
            ch => {
                buf.push(ch);
                i += 1;
            }
        }
    }

    flush(&mut buf, &mut out);
    out
}

fn flush(buf: &mut String, out: &mut Vec<Inline>) {
    if !buf.is_empty() {
        out.push(Inline::Text(std::mem::take(buf)));
    }
}

/// A span may not begin or end with whitespace, and may not be empty.
fn has_solid_edges(inner: &[char]) -> bool {
    match (inner.first(), inner.last()) {
        (Some(first), Some(last)) => !first.is_whitespace() && !last.is_whitespace(),
        _ => false,
    }
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars[from..]
        .iter()
        .position(|&c| c == target)
        .map(|offset| from + offset)
}

/// Find the closing star delimiter, skipping over code spans.
fn find_closer(chars: &[char], from: usize, strong: bool) -> Option<usize> {
    let mut i = from;
    while i < chars.len() {
        match chars[i] {
            '`' => match find_char(chars, i + 1, '`') {
                Some(close) => i = close + 1,
                None => i += 1,
            },
            '*' => {
                let double = chars.get(i + 1) == Some(&'*');
                if strong {
                    if double {
                        return Some(i);
                    }
                    i += 1;
                } else if double {
                    i += 2;
                } else {
                    return Some(i);
                }
            }
            _ => i += 1,
        }
    }
    None
}
