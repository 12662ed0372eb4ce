//! HTML serialization of the structured content tree.
//!
//! Text is escaped here and nowhere else, so nothing is ever escaped twice.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::node::{Alignment, Block, CodeBlock, Document, Inline, List, Table};

impl Document {
    /// Serialize the document to HTML.
    ///
    /// Blocks are joined with single newlines; everything within a block is
    /// emitted on one line, except code block content.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(256);
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_block(&mut out, block);
        }
        out
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph(content) => {
            out.push_str("<p>");
            write_inlines(out, content);
            out.push_str("</p>");
        }
        Block::Heading { level, content } => {
            write!(out, "<h{level}>").unwrap();
            write_inlines(out, content);
            write!(out, "</h{level}>").unwrap();
        }
        Block::Quote(content) => {
            out.push_str("<blockquote>");
            write_inlines(out, content);
            out.push_str("</blockquote>");
        }
        Block::Code(code) => write_code_block(out, code),
        Block::Table(table) => write_table(out, table),
        Block::List(list) => write_list(out, list),
    }
}

/// Code blocks render as a container with a header bar: language label on
/// the left, copy affordance on the right. Click wiring belongs to the host.
fn write_code_block(out: &mut String, code: &CodeBlock) {
    let lang = code.language.as_str();
    write!(
        out,
        r#"<div class="code-block"><div class="code-header"><span class="code-lang">{lang}</span><button class="code-copy" type="button">Copy code</button></div><pre><code class="language-{lang}">"#
    )
    .unwrap();
    match &code.html {
        Some(html) => out.push_str(html),
        None => out.push_str(&escape_html(&code.code)),
    }
    out.push_str("</code></pre></div>");
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str("<table><thead><tr>");
    for (cell, align) in table.header.iter().zip(&table.alignments) {
        write_cell(out, "th", *align, cell);
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for (cell, align) in row.iter().zip(&table.alignments) {
            write_cell(out, "td", *align, cell);
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
}

fn write_cell(out: &mut String, tag: &str, align: Alignment, content: &[Inline]) {
    match align {
        Alignment::Left => write!(out, "<{tag}>").unwrap(),
        Alignment::Center => write!(out, r#"<{tag} style="text-align: center">"#).unwrap(),
        Alignment::Right => write!(out, r#"<{tag} style="text-align: right">"#).unwrap(),
    }
    write_inlines(out, content);
    write!(out, "</{tag}>").unwrap();
}

fn write_list(out: &mut String, list: &List) {
    let close = if list.ordered {
        if list.start == 1 {
            out.push_str("<ol>");
        } else {
            write!(out, r#"<ol start="{}">"#, list.start).unwrap();
        }
        "</ol>"
    } else {
        out.push_str("<ul>");
        "</ul>"
    };
    for item in &list.items {
        out.push_str("<li>");
        write_inlines(out, &item.content);
        if let Some(nested) = &item.nested {
            write_list(out, nested);
        }
        out.push_str("</li>");
    }
    out.push_str(close);
}

fn write_inlines(out: &mut String, content: &[Inline]) {
    for inline in content {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape_html(code));
                out.push_str("</code>");
            }
            Inline::Strong(children) => {
                out.push_str("<strong>");
                write_inlines(out, children);
                out.push_str("</strong>");
            }
            Inline::Emphasis(children) => {
                out.push_str("<em>");
                write_inlines(out, children);
                out.push_str("</em>");
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::language::Language;
    use crate::node::ListItem;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_owned())
    }

    #[test]
    fn test_paragraph_with_markup() {
        let doc = Document {
            blocks: vec![Block::Paragraph(vec![
                text("use "),
                Inline::Code("a < b".to_owned()),
                text(" & "),
                Inline::Strong(vec![text("check")]),
            ])],
        };
        assert_eq!(
            doc.to_html(),
            "<p>use <code>a &lt; b</code> &amp; <strong>check</strong></p>"
        );
    }

    #[test]
    fn test_code_block_container() {
        let doc = Document {
            blocks: vec![Block::Code(CodeBlock::new(
                Language::Javascript,
                "let x = 1;",
            ))],
        };
        assert_eq!(
            doc.to_html(),
            r#"<div class="code-block"><div class="code-header"><span class="code-lang">js</span><button class="code-copy" type="button">Copy code</button></div><pre><code class="language-js">let x = 1;</code></pre></div>"#
        );
    }

    #[test]
    fn test_code_block_escapes_raw_source() {
        let doc = Document {
            blocks: vec![Block::Code(CodeBlock::new(
                Language::Html,
                "<b>&</b>",
            ))],
        };
        assert!(doc.to_html().contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn test_annotated_code_emitted_verbatim() {
        let mut code = CodeBlock::new(Language::Rust, "fn x() {}");
        code.html = Some(r#"<span class="tok-keyword">fn</span> x() {}"#.to_owned());
        code.highlighted = true;
        let doc = Document {
            blocks: vec![Block::Code(code)],
        };
        assert!(doc.to_html().contains(r#"<span class="tok-keyword">fn</span> x() {}"#));
    }

    #[test]
    fn test_table_alignment_styles() {
        let doc = Document {
            blocks: vec![Block::Table(Table {
                alignments: vec![Alignment::Left, Alignment::Center, Alignment::Right],
                header: vec![vec![text("a")], vec![text("b")], vec![text("c")]],
                rows: vec![vec![vec![text("1")], vec![text("2")], vec![text("3")]]],
            })],
        };
        assert_eq!(
            doc.to_html(),
            concat!(
                "<table><thead><tr>",
                r#"<th>a</th><th style="text-align: center">b</th><th style="text-align: right">c</th>"#,
                "</tr></thead><tbody><tr>",
                r#"<td>1</td><td style="text-align: center">2</td><td style="text-align: right">3</td>"#,
                "</tr></tbody></table>",
            )
        );
    }

    #[test]
    fn test_ordered_list_start_attribute() {
        let doc = Document {
            blocks: vec![Block::List(List {
                ordered: true,
                start: 3,
                items: vec![ListItem::new(vec![text("A")])],
            })],
        };
        assert_eq!(doc.to_html(), r#"<ol start="3"><li>A</li></ol>"#);
    }

    #[test]
    fn test_nested_list_markup() {
        let doc = Document {
            blocks: vec![Block::List(List {
                ordered: false,
                start: 1,
                items: vec![ListItem {
                    content: vec![text("A")],
                    nested: Some(List {
                        ordered: false,
                        start: 1,
                        items: vec![ListItem::new(vec![text("A1")])],
                    }),
                }],
            })],
        };
        assert_eq!(doc.to_html(), "<ul><li>A<ul><li>A1</li></ul></li></ul>");
    }

    #[test]
    fn test_blocks_joined_with_newline() {
        let doc = Document {
            blocks: vec![
                Block::Heading {
                    level: 2,
                    content: vec![text("T")],
                },
                Block::Paragraph(vec![text("p")]),
            ],
        };
        assert_eq!(doc.to_html(), "<h2>T</h2>\n<p>p</p>");
    }

    #[test]
    fn test_line_break() {
        let doc = Document {
            blocks: vec![Block::Paragraph(vec![
                text("a"),
                Inline::LineBreak,
                text("b"),
            ])],
        };
        assert_eq!(doc.to_html(), "<p>a<br>b</p>");
    }
}
