//! Code fence language classification.
//!
//! Fence info strings from model output are matched against a closed set of
//! supported languages. Anything outside the set renders as plain text.

/// Supported code block languages.
///
/// Parsed from the fence info string. Aliases collapse onto one variant
/// (`js`/`javascript`, `bash`/`sh`/`shell`, `yaml`/`yml`). [`Language::Plain`]
/// is the fallback for unrecognized or missing info strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    Javascript,
    Typescript,
    Json,
    Shell,
    Diff,
    Html,
    Css,
    Yaml,
    Python,
    Go,
    Rust,
    Java,
    Kotlin,
    C,
    Cpp,
    CSharp,
    Php,
    Sql,
    Ruby,
    #[default]
    Plain,
}

impl Language {
    /// Parse a language from a code fence info string.
    ///
    /// Matching is case-insensitive. Returns None if the info string is not
    /// a supported language; callers decide whether to warn before falling
    /// back to [`Language::Plain`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "js" | "javascript" => Some(Self::Javascript),
            "ts" | "typescript" => Some(Self::Typescript),
            "json" => Some(Self::Json),
            "bash" | "sh" | "shell" => Some(Self::Shell),
            "diff" => Some(Self::Diff),
            "html" => Some(Self::Html),
            "css" => Some(Self::Css),
            "yaml" | "yml" => Some(Self::Yaml),
            "python" => Some(Self::Python),
            "go" => Some(Self::Go),
            "rust" => Some(Self::Rust),
            "java" => Some(Self::Java),
            "kotlin" => Some(Self::Kotlin),
            "c" => Some(Self::C),
            "cpp" => Some(Self::Cpp),
            "csharp" => Some(Self::CSharp),
            "php" => Some(Self::Php),
            "sql" => Some(Self::Sql),
            "ruby" => Some(Self::Ruby),
            _ => None,
        }
    }

    /// Canonical identifier, used for the `language-*` CSS class and the
    /// code block header label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Javascript => "js",
            Self::Typescript => "ts",
            Self::Json => "json",
            Self::Shell => "bash",
            Self::Diff => "diff",
            Self::Html => "html",
            Self::Css => "css",
            Self::Yaml => "yaml",
            Self::Python => "python",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Php => "php",
            Self::Sql => "sql",
            Self::Ruby => "ruby",
            Self::Plain => "plaintext",
        }
    }

    /// Fence info string for plain text re-emission.
    ///
    /// Plain text fences carry no info string, so this is None for
    /// [`Language::Plain`].
    #[must_use]
    pub fn fence_tag(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            other => Some(other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        let aliases = [
            ("js", Language::Javascript),
            ("javascript", Language::Javascript),
            ("ts", Language::Typescript),
            ("typescript", Language::Typescript),
            ("bash", Language::Shell),
            ("sh", Language::Shell),
            ("shell", Language::Shell),
            ("yaml", Language::Yaml),
            ("yml", Language::Yaml),
        ];

        for (name, expected) in aliases {
            assert_eq!(Language::parse(name), Some(expected), "Failed to parse: {name}");
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Language::parse("JS"), Some(Language::Javascript));
        assert_eq!(Language::parse("Python"), Some(Language::Python));
        assert_eq!(Language::parse("SQL"), Some(Language::Sql));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Language::parse(" rust "), Some(Language::Rust));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Language::parse("brainfuck"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("c++"), None);
    }

    #[test]
    fn test_canonical_identifiers() {
        assert_eq!(Language::Javascript.as_str(), "js");
        assert_eq!(Language::Shell.as_str(), "bash");
        assert_eq!(Language::Plain.as_str(), "plaintext");
    }

    #[test]
    fn test_fence_tag_omitted_for_plain() {
        assert_eq!(Language::Plain.fence_tag(), None);
        assert_eq!(Language::Javascript.fence_tag(), Some("js"));
    }

    #[test]
    fn test_default_is_plain() {
        assert_eq!(Language::default(), Language::Plain);
    }
}
