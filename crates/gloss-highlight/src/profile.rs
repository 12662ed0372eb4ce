//! Per-language token tables driving the annotation passes.

use gloss_markup::Language;

/// A string form recognised by the string pass.
///
/// Delimiters are written in their escaped form (`&quot;`, `&#39;`) because
/// every pass runs over already-escaped text.
pub(crate) struct StringRule {
    pub(crate) delim: &'static str,
    pub(crate) multiline: bool,
}

/// Token tables for one language.
pub(crate) struct LanguageProfile {
    pub(crate) line_comments: &'static [&'static str],
    pub(crate) block_comment: Option<(&'static str, &'static str)>,
    pub(crate) strings: &'static [StringRule],
    pub(crate) keywords: &'static [&'static str],
    pub(crate) builtins: &'static [&'static str],
    /// Keywords and builtins match regardless of case (SQL, YAML scalars).
    pub(crate) fold_case: bool,
}

const DOUBLE_QUOTED: StringRule = StringRule {
    delim: "&quot;",
    multiline: false,
};

const SINGLE_QUOTED: StringRule = StringRule {
    delim: "&#39;",
    multiline: false,
};

const BACKTICK_QUOTED: StringRule = StringRule {
    delim: "`",
    multiline: true,
};

const JAVASCRIPT: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED, BACKTICK_QUOTED],
    keywords: &[
        "const",
        "let",
        "var",
        "function",
        "return",
        "if",
        "else",
        "for",
        "while",
        "do",
        "switch",
        "case",
        "break",
        "continue",
        "new",
        "delete",
        "class",
        "extends",
        "super",
        "this",
        "typeof",
        "instanceof",
        "in",
        "of",
        "try",
        "catch",
        "finally",
        "throw",
        "async",
        "await",
        "yield",
        "import",
        "export",
        "from",
        "default",
        "void",
        "null",
        "undefined",
        "true",
        "false",
    ],
    builtins: &[
        "console",
        "Math",
        "JSON",
        "Object",
        "Array",
        "String",
        "Number",
        "Boolean",
        "Promise",
        "Map",
        "Set",
        "Date",
        "RegExp",
        "Error",
        "window",
        "document",
    ],
    fold_case: false,
};

const TYPESCRIPT: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED, BACKTICK_QUOTED],
    keywords: &[
        "const",
        "let",
        "var",
        "function",
        "return",
        "if",
        "else",
        "for",
        "while",
        "do",
        "switch",
        "case",
        "break",
        "continue",
        "new",
        "delete",
        "class",
        "extends",
        "implements",
        "interface",
        "type",
        "enum",
        "namespace",
        "declare",
        "abstract",
        "readonly",
        "public",
        "private",
        "protected",
        "static",
        "super",
        "this",
        "typeof",
        "keyof",
        "instanceof",
        "in",
        "of",
        "as",
        "is",
        "try",
        "catch",
        "finally",
        "throw",
        "async",
        "await",
        "yield",
        "import",
        "export",
        "from",
        "default",
        "void",
        "never",
        "unknown",
        "any",
        "string",
        "number",
        "boolean",
        "null",
        "undefined",
        "true",
        "false",
    ],
    builtins: &[
        "console",
        "Math",
        "JSON",
        "Object",
        "Array",
        "Promise",
        "Map",
        "Set",
        "Date",
        "RegExp",
        "Error",
        "Record",
        "Partial",
        "Readonly",
        "Pick",
        "Omit",
    ],
    fold_case: false,
};

const JSON: LanguageProfile = LanguageProfile {
    line_comments: &[],
    block_comment: None,
    strings: &[DOUBLE_QUOTED],
    keywords: &["true", "false", "null"],
    builtins: &[],
    fold_case: false,
};

const SHELL: LanguageProfile = LanguageProfile {
    line_comments: &["#"],
    block_comment: None,
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &[
        "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
        "in", "function", "select", "time", "local", "export", "readonly", "return", "exit",
        "break", "continue", "shift", "unset", "set", "source", "alias", "eval", "exec", "trap",
    ],
    builtins: &[
        "echo", "printf", "read", "cd", "pwd", "ls", "cp", "mv", "rm", "mkdir", "touch", "cat",
        "grep", "sed", "awk", "find", "sort", "uniq", "head", "tail", "xargs", "chmod", "chown",
        "curl", "wget", "tar", "git", "sudo", "test",
    ],
    fold_case: false,
};

const HTML: LanguageProfile = LanguageProfile {
    line_comments: &[],
    // The input is escaped before any pass runs, so comment delimiters are
    // matched in their entity form.
    block_comment: Some(("&lt;!--", "--&gt;")),
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &[
        "html", "head", "body", "div", "span", "p", "a", "img", "script", "style", "link", "meta",
        "title", "ul", "ol", "li", "table", "thead", "tbody", "tr", "td", "th", "form", "input",
        "button", "select", "option", "textarea", "label", "h1", "h2", "h3", "h4", "h5", "h6",
        "br", "hr", "nav", "header", "footer", "section", "article", "main", "aside", "strong",
        "em", "code", "pre",
    ],
    builtins: &[
        "class", "id", "href", "src", "alt", "type", "value", "name", "rel", "target", "width",
        "height", "style", "title", "placeholder", "disabled", "checked",
    ],
    fold_case: true,
};

const CSS: LanguageProfile = LanguageProfile {
    line_comments: &[],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &[
        "color",
        "background",
        "margin",
        "padding",
        "border",
        "display",
        "position",
        "width",
        "height",
        "font",
        "flex",
        "grid",
        "float",
        "clear",
        "overflow",
        "opacity",
        "content",
        "cursor",
        "transition",
        "transform",
        "animation",
        "align",
        "justify",
        "gap",
        "top",
        "bottom",
        "left",
        "right",
    ],
    builtins: &[
        "none", "auto", "block", "inline", "absolute", "relative", "fixed", "sticky", "hidden",
        "visible", "center", "bold", "italic", "pointer", "hover", "solid", "dashed", "inherit",
        "initial", "important",
    ],
    fold_case: true,
};

const YAML: LanguageProfile = LanguageProfile {
    line_comments: &["#"],
    block_comment: None,
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &["true", "false", "null", "yes", "no"],
    builtins: &[],
    fold_case: true,
};

const PYTHON: LanguageProfile = LanguageProfile {
    line_comments: &["#"],
    block_comment: None,
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &[
        "def", "return", "if", "elif", "else", "for", "while", "break", "continue", "pass",
        "import", "from", "as", "class", "try", "except", "finally", "raise", "with", "lambda",
        "yield", "global", "nonlocal", "assert", "del", "not", "and", "or", "in", "is", "None",
        "True", "False", "async", "await", "match", "case",
    ],
    builtins: &[
        "print",
        "len",
        "range",
        "str",
        "int",
        "float",
        "bool",
        "list",
        "dict",
        "set",
        "tuple",
        "type",
        "isinstance",
        "enumerate",
        "zip",
        "map",
        "filter",
        "sorted",
        "sum",
        "min",
        "max",
        "abs",
        "open",
        "super",
        "self",
    ],
    fold_case: false,
};

const GO: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED, BACKTICK_QUOTED],
    keywords: &[
        "func",
        "package",
        "import",
        "var",
        "const",
        "type",
        "struct",
        "interface",
        "map",
        "chan",
        "go",
        "defer",
        "return",
        "if",
        "else",
        "for",
        "range",
        "switch",
        "case",
        "default",
        "break",
        "continue",
        "fallthrough",
        "select",
        "goto",
        "nil",
        "true",
        "false",
    ],
    builtins: &[
        "make", "new", "len", "cap", "append", "copy", "delete", "panic", "recover", "println",
        "error", "string", "int", "int32", "int64", "uint", "float32", "float64", "bool", "byte",
        "rune",
    ],
    fold_case: false,
};

const RUST: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    // Single quotes are lifetimes more often than char literals, so only
    // double-quoted strings are recognised.
    strings: &[DOUBLE_QUOTED],
    keywords: &[
        "fn", "let", "mut", "const", "static", "struct", "enum", "trait", "impl", "for", "while",
        "loop", "if", "else", "match", "return", "break", "continue", "pub", "use", "mod",
        "crate", "self", "Self", "super", "where", "async", "await", "move", "ref", "dyn",
        "unsafe", "extern", "type", "as", "in", "true", "false",
    ],
    builtins: &[
        "String", "str", "Vec", "Option", "Some", "None", "Result", "Ok", "Err", "Box", "Rc",
        "Arc", "HashMap", "HashSet", "println", "vec", "i32", "i64", "u32", "u64", "usize", "f64",
        "bool",
    ],
    fold_case: false,
};

const JAVA: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED],
    keywords: &[
        "public",
        "private",
        "protected",
        "class",
        "interface",
        "enum",
        "extends",
        "implements",
        "static",
        "final",
        "abstract",
        "void",
        "int",
        "long",
        "double",
        "float",
        "boolean",
        "char",
        "byte",
        "short",
        "new",
        "return",
        "if",
        "else",
        "for",
        "while",
        "do",
        "switch",
        "case",
        "break",
        "continue",
        "try",
        "catch",
        "finally",
        "throw",
        "throws",
        "import",
        "package",
        "this",
        "super",
        "null",
        "true",
        "false",
        "instanceof",
        "synchronized",
        "volatile",
        "record",
        "var",
    ],
    builtins: &[
        "System",
        "String",
        "Integer",
        "Long",
        "Double",
        "Boolean",
        "Object",
        "List",
        "Map",
        "Set",
        "ArrayList",
        "HashMap",
        "Optional",
        "Stream",
        "Exception",
    ],
    fold_case: false,
};

const KOTLIN: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED],
    keywords: &[
        "fun",
        "val",
        "var",
        "class",
        "object",
        "interface",
        "data",
        "sealed",
        "open",
        "override",
        "abstract",
        "private",
        "public",
        "protected",
        "internal",
        "return",
        "if",
        "else",
        "when",
        "for",
        "while",
        "do",
        "break",
        "continue",
        "try",
        "catch",
        "finally",
        "throw",
        "import",
        "package",
        "this",
        "super",
        "null",
        "true",
        "false",
        "is",
        "in",
        "as",
        "by",
        "companion",
        "init",
        "constructor",
        "suspend",
        "lateinit",
    ],
    builtins: &[
        "println",
        "listOf",
        "mapOf",
        "setOf",
        "mutableListOf",
        "mutableMapOf",
        "String",
        "Int",
        "Long",
        "Double",
        "Boolean",
        "Any",
        "Unit",
        "Nothing",
        "Pair",
    ],
    fold_case: false,
};

const C: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED],
    keywords: &[
        "int", "char", "long", "short", "float", "double", "void", "unsigned", "signed", "struct",
        "union", "enum", "typedef", "const", "static", "extern", "register", "volatile", "return",
        "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
        "goto", "sizeof", "inline",
    ],
    builtins: &[
        "printf", "fprintf", "sprintf", "scanf", "malloc", "calloc", "realloc", "free", "memcpy",
        "memset", "strlen", "strcpy", "strcmp", "strncmp", "NULL", "FILE", "size_t", "stdin",
        "stdout", "stderr",
    ],
    fold_case: false,
};

const CPP: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED],
    keywords: &[
        "int",
        "char",
        "long",
        "short",
        "float",
        "double",
        "void",
        "unsigned",
        "signed",
        "struct",
        "union",
        "enum",
        "typedef",
        "const",
        "static",
        "extern",
        "volatile",
        "return",
        "if",
        "else",
        "for",
        "while",
        "do",
        "switch",
        "case",
        "default",
        "break",
        "continue",
        "goto",
        "sizeof",
        "inline",
        "class",
        "public",
        "private",
        "protected",
        "virtual",
        "override",
        "template",
        "typename",
        "namespace",
        "using",
        "new",
        "delete",
        "this",
        "try",
        "catch",
        "throw",
        "nullptr",
        "true",
        "false",
        "auto",
        "constexpr",
        "operator",
        "friend",
        "explicit",
        "mutable",
    ],
    builtins: &[
        "std",
        "cout",
        "cin",
        "cerr",
        "endl",
        "string",
        "vector",
        "map",
        "set",
        "pair",
        "shared_ptr",
        "unique_ptr",
        "make_shared",
        "make_unique",
    ],
    fold_case: false,
};

const CSHARP: LanguageProfile = LanguageProfile {
    line_comments: &["//"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED],
    keywords: &[
        "public",
        "private",
        "protected",
        "internal",
        "class",
        "interface",
        "struct",
        "enum",
        "record",
        "namespace",
        "using",
        "static",
        "readonly",
        "const",
        "void",
        "int",
        "long",
        "double",
        "float",
        "decimal",
        "bool",
        "char",
        "byte",
        "string",
        "var",
        "new",
        "return",
        "if",
        "else",
        "for",
        "foreach",
        "while",
        "do",
        "switch",
        "case",
        "break",
        "continue",
        "try",
        "catch",
        "finally",
        "throw",
        "this",
        "base",
        "null",
        "true",
        "false",
        "is",
        "as",
        "in",
        "out",
        "ref",
        "async",
        "await",
        "get",
        "set",
        "override",
        "virtual",
        "abstract",
        "sealed",
        "partial",
    ],
    builtins: &[
        "Console",
        "String",
        "Int32",
        "Int64",
        "Boolean",
        "Object",
        "List",
        "Dictionary",
        "Task",
        "IEnumerable",
        "Math",
        "DateTime",
        "Guid",
        "Exception",
    ],
    fold_case: false,
};

const PHP: LanguageProfile = LanguageProfile {
    line_comments: &["//", "#"],
    block_comment: Some(("/*", "*/")),
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &[
        "function",
        "return",
        "if",
        "else",
        "elseif",
        "for",
        "foreach",
        "while",
        "do",
        "switch",
        "case",
        "break",
        "continue",
        "class",
        "interface",
        "trait",
        "extends",
        "implements",
        "public",
        "private",
        "protected",
        "static",
        "const",
        "new",
        "try",
        "catch",
        "finally",
        "throw",
        "use",
        "namespace",
        "require",
        "include",
        "echo",
        "print",
        "null",
        "true",
        "false",
        "array",
        "global",
        "instanceof",
        "abstract",
        "final",
        "fn",
        "match",
    ],
    builtins: &[
        "strlen",
        "count",
        "array_map",
        "array_filter",
        "array_merge",
        "array_keys",
        "implode",
        "explode",
        "isset",
        "empty",
        "var_dump",
        "printf",
        "sprintf",
        "json_encode",
        "json_decode",
    ],
    fold_case: false,
};

const SQL: LanguageProfile = LanguageProfile {
    line_comments: &["--"],
    block_comment: Some(("/*", "*/")),
    strings: &[SINGLE_QUOTED],
    keywords: &[
        "select", "from", "where", "join", "left", "right", "inner", "outer", "full", "cross",
        "on", "group", "by", "order", "having", "limit", "offset", "insert", "into", "values",
        "update", "set", "delete", "create", "table", "index", "view", "drop", "alter", "add",
        "primary", "key", "foreign", "references", "not", "null", "default", "unique", "and",
        "or", "in", "is", "like", "between", "exists", "case", "when", "then", "else", "end",
        "as", "distinct", "union", "all",
    ],
    builtins: &[
        "count", "sum", "avg", "min", "max", "coalesce", "nullif", "cast", "now", "length",
        "upper", "lower", "round", "concat",
    ],
    fold_case: true,
};

const RUBY: LanguageProfile = LanguageProfile {
    line_comments: &["#"],
    block_comment: None,
    strings: &[DOUBLE_QUOTED, SINGLE_QUOTED],
    keywords: &[
        "def", "end", "return", "if", "elsif", "else", "unless", "case", "when", "while",
        "until", "for", "do", "break", "next", "redo", "retry", "begin", "rescue", "ensure",
        "raise", "class", "module", "require", "include", "extend", "yield", "super", "self",
        "nil", "true", "false", "and", "or", "not", "then", "lambda", "proc", "attr_accessor",
        "attr_reader", "attr_writer",
    ],
    builtins: &[
        "puts", "print", "p", "gets", "loop", "Array", "Hash", "String", "Integer", "Float",
        "Symbol", "Proc", "each", "map", "select", "reject", "reduce", "new",
    ],
    fold_case: false,
};

/// Returns the token tables for `language`, or `None` when the language is
/// annotated some other way (diff) or not at all (plain text).
pub(crate) fn profile_for(language: Language) -> Option<&'static LanguageProfile> {
    match language {
        Language::Javascript => Some(&JAVASCRIPT),
        Language::Typescript => Some(&TYPESCRIPT),
        Language::Json => Some(&JSON),
        Language::Shell => Some(&SHELL),
        Language::Html => Some(&HTML),
        Language::Css => Some(&CSS),
        Language::Yaml => Some(&YAML),
        Language::Python => Some(&PYTHON),
        Language::Go => Some(&GO),
        Language::Rust => Some(&RUST),
        Language::Java => Some(&JAVA),
        Language::Kotlin => Some(&KOTLIN),
        Language::C => Some(&C),
        Language::Cpp => Some(&CPP),
        Language::CSharp => Some(&CSHARP),
        Language::Php => Some(&PHP),
        Language::Sql => Some(&SQL),
        Language::Ruby => Some(&RUBY),
        Language::Diff | Language::Plain => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiled_languages() {
        assert!(profile_for(Language::Javascript).is_some());
        assert!(profile_for(Language::Sql).is_some());
        assert!(profile_for(Language::Diff).is_none());
        assert!(profile_for(Language::Plain).is_none());
    }

    #[test]
    fn test_string_delimiters_are_escaped_forms() {
        let profile = profile_for(Language::Python).unwrap();
        let delims: Vec<&str> = profile.strings.iter().map(|rule| rule.delim).collect();
        assert_eq!(delims, vec!["&quot;", "&#39;"]);
    }

    #[test]
    fn test_sql_folds_case() {
        assert!(profile_for(Language::Sql).unwrap().fold_case);
        assert!(!profile_for(Language::Rust).unwrap().fold_case);
    }
}
