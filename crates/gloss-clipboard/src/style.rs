//! Style resolution for the rich clipboard serialization.
//!
//! Paste targets never see the origin stylesheet, so every visual property
//! a node needs must be resolved up front and written as an inline `style`
//! attribute. The resolver surface is deliberately narrow: a curated set of
//! properties per node kind, nothing cascading.

/// Node kinds the serializer asks the resolver about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    Paragraph,
    Heading(u8),
    Quote,
    CodeBlock,
    InlineCode,
    Table,
    HeaderCell,
    Cell,
    List,
}

/// Resolved visual properties for one node.
///
/// `None` means the property is left to the paste target's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub color: Option<String>,
    pub background: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub border: Option<String>,
    pub padding: Option<String>,
    pub text_align: Option<String>,
}

impl ResolvedStyle {
    /// Serializes the set properties as `property: value` declarations
    /// joined by `; `, in a fixed order.
    #[must_use]
    pub fn as_inline(&self) -> String {
        let fields = [
            ("color", &self.color),
            ("background", &self.background),
            ("font-family", &self.font_family),
            ("font-size", &self.font_size),
            ("font-weight", &self.font_weight),
            ("font-style", &self.font_style),
            ("border", &self.border),
            ("padding", &self.padding),
            ("text-align", &self.text_align),
        ];
        let mut declarations = Vec::new();
        for (property, value) in fields {
            if let Some(value) = value {
                declarations.push(format!("{property}: {value}"));
            }
        }
        declarations.join("; ")
    }
}

/// Maps node kinds to resolved styles.
pub trait StyleResolver {
    fn resolve(&self, target: StyleTarget) -> ResolvedStyle;
}

const TEXT_FONT: &str = "Helvetica, Arial, sans-serif";
const MONO_FONT: &str = "SFMono-Regular, Consolas, Menlo, monospace";

/// Built-in resolver approximating the review card's on-screen look.
pub struct Theme;

impl Theme {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleResolver for Theme {
    fn resolve(&self, target: StyleTarget) -> ResolvedStyle {
        match target {
            StyleTarget::Paragraph => ResolvedStyle {
                color: Some("#24292f".to_owned()),
                font_family: Some(TEXT_FONT.to_owned()),
                font_size: Some("14px".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::Heading(level) => ResolvedStyle {
                color: Some("#1f2328".to_owned()),
                font_family: Some(TEXT_FONT.to_owned()),
                font_size: Some(heading_size(level).to_owned()),
                font_weight: Some("600".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::Quote => ResolvedStyle {
                color: Some("#57606a".to_owned()),
                font_family: Some(TEXT_FONT.to_owned()),
                font_size: Some("14px".to_owned()),
                font_style: Some("italic".to_owned()),
                padding: Some("0 0 0 12px".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::CodeBlock => ResolvedStyle {
                color: Some("#24292f".to_owned()),
                background: Some("#f6f8fa".to_owned()),
                font_family: Some(MONO_FONT.to_owned()),
                font_size: Some("13px".to_owned()),
                border: Some("1px solid #d0d7de".to_owned()),
                padding: Some("12px".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::InlineCode => ResolvedStyle {
                background: Some("#eff1f3".to_owned()),
                font_family: Some(MONO_FONT.to_owned()),
                font_size: Some("13px".to_owned()),
                padding: Some("1px 4px".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::Table => ResolvedStyle {
                font_family: Some(TEXT_FONT.to_owned()),
                font_size: Some("14px".to_owned()),
                border: Some("1px solid #d0d7de".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::HeaderCell => ResolvedStyle {
                background: Some("#f6f8fa".to_owned()),
                font_weight: Some("600".to_owned()),
                border: Some("1px solid #d0d7de".to_owned()),
                padding: Some("6px 10px".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::Cell => ResolvedStyle {
                border: Some("1px solid #d0d7de".to_owned()),
                padding: Some("6px 10px".to_owned()),
                ..ResolvedStyle::default()
            },
            StyleTarget::List => ResolvedStyle {
                color: Some("#24292f".to_owned()),
                font_family: Some(TEXT_FONT.to_owned()),
                font_size: Some("14px".to_owned()),
                padding: Some("0 0 0 24px".to_owned()),
                ..ResolvedStyle::default()
            },
        }
    }
}

fn heading_size(level: u8) -> &'static str {
    match level {
        1 => "24px",
        2 => "20px",
        3 => "17px",
        _ => "15px",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_obj_safe!(StyleResolver);

    #[test]
    fn test_empty_style_has_no_declarations() {
        assert_eq!(ResolvedStyle::default().as_inline(), "");
    }

    #[test]
    fn test_declarations_keep_field_order() {
        let style = ResolvedStyle {
            color: Some("#000".to_owned()),
            padding: Some("4px".to_owned()),
            text_align: Some("right".to_owned()),
            ..ResolvedStyle::default()
        };
        assert_eq!(
            style.as_inline(),
            "color: #000; padding: 4px; text-align: right"
        );
    }

    #[test]
    fn test_theme_scales_heading_sizes() {
        let theme = Theme::new();
        let h1 = theme.resolve(StyleTarget::Heading(1));
        let h4 = theme.resolve(StyleTarget::Heading(4));
        assert_eq!(h1.font_size.as_deref(), Some("24px"));
        assert_eq!(h4.font_size.as_deref(), Some("15px"));
    }

    #[test]
    fn test_theme_uses_monospace_for_code() {
        let theme = Theme::new();
        let code = theme.resolve(StyleTarget::CodeBlock);
        let inline = theme.resolve(StyleTarget::InlineCode);
        assert!(code.font_family.as_deref().unwrap_or("").contains("Consolas"));
        assert_eq!(code.font_family, inline.font_family);
    }
}
