//! Serializes a document to self-contained rich markup.
//!
//! The walk parallels `Document::to_html`, but every visual decision is
//! asked of the resolver and written inline, and screen chrome (language
//! label, copy button, annotation spans) is left out. What remains must
//! survive a paste into targets that strip classes and stylesheets.

use std::fmt::Write as _;

use gloss_markup::{Alignment, Block, Document, Inline, List, Table, escape_html};

use crate::style::{ResolvedStyle, StyleResolver, StyleTarget};

pub(crate) fn styled_html(document: &Document, resolver: &dyn StyleResolver) -> String {
    let blocks: Vec<String> = document
        .blocks
        .iter()
        .map(|block| styled_block(block, resolver))
        .collect();
    blocks.join("\n")
}

fn styled_block(block: &Block, resolver: &dyn StyleResolver) -> String {
    let mut out = String::new();
    match block {
        Block::Paragraph(content) => {
            write!(
                out,
                "<p{}>{}</p>",
                attr(&resolver.resolve(StyleTarget::Paragraph)),
                styled_inlines(content, resolver)
            )
            .unwrap();
        }
        Block::Heading { level, content } => {
            let style = attr(&resolver.resolve(StyleTarget::Heading(*level)));
            write!(
                out,
                "<h{level}{style}>{}</h{level}>",
                styled_inlines(content, resolver)
            )
            .unwrap();
        }
        Block::Quote(content) => {
            write!(
                out,
                "<blockquote{}>{}</blockquote>",
                attr(&resolver.resolve(StyleTarget::Quote)),
                styled_inlines(content, resolver)
            )
            .unwrap();
        }
        Block::Code(code) => {
            write!(
                out,
                "<pre{}><code>{}</code></pre>",
                attr(&resolver.resolve(StyleTarget::CodeBlock)),
                escape_html(&code.code)
            )
            .unwrap();
        }
        Block::Table(table) => out.push_str(&styled_table(table, resolver)),
        Block::List(list) => out.push_str(&styled_list(list, resolver)),
    }
    out
}

fn styled_table(table: &Table, resolver: &dyn StyleResolver) -> String {
    let mut out = String::new();
    write!(out, "<table{}>", attr(&resolver.resolve(StyleTarget::Table))).unwrap();
    out.push_str("<thead><tr>");
    for (index, cell) in table.header.iter().enumerate() {
        write_cell(
            &mut out,
            "th",
            StyleTarget::HeaderCell,
            cell_alignment(table, index),
            cell,
            resolver,
        );
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for (index, cell) in row.iter().enumerate() {
            write_cell(
                &mut out,
                "td",
                StyleTarget::Cell,
                cell_alignment(table, index),
                cell,
                resolver,
            );
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn cell_alignment(table: &Table, index: usize) -> Alignment {
    table.alignments.get(index).copied().unwrap_or_default()
}

fn write_cell(
    out: &mut String,
    tag: &str,
    target: StyleTarget,
    alignment: Alignment,
    content: &[Inline],
    resolver: &dyn StyleResolver,
) {
    let mut style = resolver.resolve(target);
    match alignment {
        Alignment::Left => {}
        Alignment::Center => style.text_align = Some("center".to_owned()),
        Alignment::Right => style.text_align = Some("right".to_owned()),
    }
    write!(
        out,
        "<{tag}{}>{}</{tag}>",
        attr(&style),
        styled_inlines(content, resolver)
    )
    .unwrap();
}

fn styled_list(list: &List, resolver: &dyn StyleResolver) -> String {
    let mut out = String::new();
    let style = attr(&resolver.resolve(StyleTarget::List));
    if list.ordered {
        if list.start == 1 {
            write!(out, "<ol{style}>").unwrap();
        } else {
            write!(out, "<ol start=\"{}\"{style}>", list.start).unwrap();
        }
    } else {
        write!(out, "<ul{style}>").unwrap();
    }
    for item in &list.items {
        write!(out, "<li>{}", styled_inlines(&item.content, resolver)).unwrap();
        if let Some(nested) = &item.nested {
            out.push_str(&styled_list(nested, resolver));
        }
        out.push_str("</li>");
    }
    out.push_str(if list.ordered { "</ol>" } else { "</ul>" });
    out
}

fn styled_inlines(content: &[Inline], resolver: &dyn StyleResolver) -> String {
    let mut out = String::new();
    for inline in content {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Code(code) => {
                write!(
                    out,
                    "<code{}>{}</code>",
                    attr(&resolver.resolve(StyleTarget::InlineCode)),
                    escape_html(code)
                )
                .unwrap();
            }
            Inline::Strong(inner) => {
                write!(out, "<strong>{}</strong>", styled_inlines(inner, resolver)).unwrap();
            }
            Inline::Emphasis(inner) => {
                write!(out, "<em>{}</em>", styled_inlines(inner, resolver)).unwrap();
            }
            Inline::LineBreak => out.push_str("<br>"),
        }
    }
    out
}

fn attr(style: &ResolvedStyle) -> String {
    let inline = style.as_inline();
    if inline.is_empty() {
        String::new()
    } else {
        format!(" style=\"{inline}\"")
    }
}

#[cfg(test)]
mod tests {
    use gloss_markup::Renderer;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Resolver that sets nothing, leaving the bare structure visible.
    struct Bare;

    impl StyleResolver for Bare {
        fn resolve(&self, _target: StyleTarget) -> ResolvedStyle {
            ResolvedStyle::default()
        }
    }

    fn render(markdown: &str) -> Document {
        Renderer::new().render(markdown)
    }

    #[test]
    fn test_bare_structure() {
        let document = render("# Title\n\nbody with **bold**");
        assert_eq!(
            styled_html(&document, &Bare),
            "<h1>Title</h1>\n<p>body with <strong>bold</strong></p>"
        );
    }

    #[test]
    fn test_code_block_has_no_chrome() {
        let document = render("```js\nlet x = 1;\n```");
        let html = styled_html(&document, &Bare);
        assert_eq!(html, "<pre><code>let x = 1;</code></pre>");
        assert!(!html.contains("Copy code"));
        assert!(!html.contains("tok-"));
    }

    #[test]
    fn test_alignment_overrides_cell_style() {
        let document = render("| a | b |\n| --- | ---: |\n| 1 | 2 |");
        let html = styled_html(&document, &Bare);
        assert_eq!(
            html,
            "<table><thead><tr><th>a</th>\
             <th style=\"text-align: right\">b</th></tr></thead>\
             <tbody><tr><td>1</td>\
             <td style=\"text-align: right\">2</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_theme_styles_are_inline() {
        let document = render("plain paragraph");
        let html = styled_html(&document, &crate::style::Theme::new());
        assert_eq!(
            html,
            "<p style=\"color: #24292f; font-family: Helvetica, Arial, sans-serif; \
             font-size: 14px\">plain paragraph</p>"
        );
    }

    #[test]
    fn test_nested_list_structure() {
        let document = render("- outer\n  - inner");
        assert_eq!(
            styled_html(&document, &Bare),
            "<ul><li>outer<ul><li>inner</li></ul></li></ul>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let document = render("a < b & c");
        assert_eq!(styled_html(&document, &Bare), "<p>a &lt; b &amp; c</p>");
    }
}
