//! Regex passes that wrap recognised tokens in classed spans.

use std::fmt::Write as _;

use gloss_markup::{Language, escape_html};
use regex::{Captures, Regex};

use crate::HighlightError;
use crate::placeholder::PlaceholderTable;
use crate::profile::{LanguageProfile, profile_for};

/// Guard alternatives consumed whole ahead of the real pattern, so a pass
/// can never match the digits inside an existing token or inside a numeric
/// character reference produced by the escaper (`&#39;`).
const TOKEN_GUARD: &str = r"\x01[0-9]+\x02|&#[0-9]+;";

/// The string pass keeps only the token guard: its delimiters are
/// themselves character references.
const STRING_GUARD: &str = r"\x01[0-9]+\x02";

const NUMBER_PATTERN: &str = r"\b0x[0-9a-fA-F]+\b|\b[0-9]+(?:\.[0-9]+)?\b";

/// Escapes `code` and wraps its tokens in `tok-*` spans.
///
/// Passes run in a fixed order: block comments, line comments, strings,
/// numbers, keywords, builtins, call sites. Each matched token is stashed
/// behind a placeholder so no later pass can touch text inside it.
pub(crate) fn annotate(code: &str, language: Language) -> Result<String, HighlightError> {
    let escaped = escape_html(code);
    if language == Language::Diff {
        return Ok(annotate_diff(&escaped));
    }
    let Some(profile) = profile_for(language) else {
        return Ok(escaped);
    };
    annotate_with_profile(&escaped, profile)
}

fn annotate_with_profile(
    escaped: &str,
    profile: &LanguageProfile,
) -> Result<String, HighlightError> {
    let mut table = PlaceholderTable::new();
    let mut text = escaped.to_owned();

    if let Some((open, close)) = profile.block_comment {
        let pattern = format!("(?s){}.*?{}", regex::escape(open), regex::escape(close));
        text = stash_matches(&text, TOKEN_GUARD, &pattern, "comment", &mut table)?;
    }
    for prefix in profile.line_comments {
        let pattern = format!("{}[^\n]*", regex::escape(prefix));
        text = stash_matches(&text, TOKEN_GUARD, &pattern, "comment", &mut table)?;
    }
    for rule in profile.strings {
        let delim = regex::escape(rule.delim);
        let pattern = if rule.multiline {
            format!(r"(?s){delim}(?:\\.|[^\\])*?{delim}")
        } else {
            format!(r"{delim}(?:\\.|[^\\\n])*?{delim}")
        };
        text = stash_matches(&text, STRING_GUARD, &pattern, "string", &mut table)?;
    }
    text = stash_matches(&text, TOKEN_GUARD, NUMBER_PATTERN, "number", &mut table)?;
    if !profile.keywords.is_empty() {
        let pattern = word_pattern(profile.keywords, profile.fold_case);
        text = stash_matches(&text, TOKEN_GUARD, &pattern, "keyword", &mut table)?;
    }
    if !profile.builtins.is_empty() {
        let pattern = word_pattern(profile.builtins, profile.fold_case);
        text = stash_matches(&text, TOKEN_GUARD, &pattern, "builtin", &mut table)?;
    }
    text = stash_call_sites(&text, &mut table)?;
    table.restore_all(text)
}

/// Runs one pass, stashing every real match as a `tok-{class}` span.
///
/// The guard alternatives carry no capture group, so group 1 is present
/// exactly when the real pattern matched.
fn stash_matches(
    text: &str,
    guard: &str,
    pattern: &str,
    class: &str,
    table: &mut PlaceholderTable,
) -> Result<String, HighlightError> {
    let re = Regex::new(&format!("{guard}|({pattern})"))?;
    let replaced = re.replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
        Some(hit) => table.stash(format!(
            "<span class=\"tok-{class}\">{}</span>",
            hit.as_str()
        )),
        None => caps[0].to_owned(),
    });
    Ok(replaced.into_owned())
}

/// Wraps identifiers directly followed by an opening paren.
///
/// Keywords and builtins were stashed by earlier passes, so whatever
/// identifier is still left in front of a paren is a plain call site.
fn stash_call_sites(text: &str, table: &mut PlaceholderTable) -> Result<String, HighlightError> {
    let re = Regex::new(&format!(
        r"{TOKEN_GUARD}|\b([A-Za-z_][A-Za-z0-9_]*)(\s*)\("
    ))?;
    let replaced = re.replace_all(text, |caps: &Captures<'_>| {
        let Some(name) = caps.get(1) else {
            return caps[0].to_owned();
        };
        let spacing = caps.get(2).map_or("", |m| m.as_str());
        let token = table.stash(format!(
            "<span class=\"tok-call\">{}</span>",
            name.as_str()
        ));
        format!("{token}{spacing}(")
    });
    Ok(replaced.into_owned())
}

fn word_pattern(words: &[&str], fold_case: bool) -> String {
    let list = words.join("|");
    if fold_case {
        format!(r"\b(?i:{list})\b")
    } else {
        format!(r"\b(?:{list})\b")
    }
}

/// Diff output is classified per line, not per token.
fn annotate_diff(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len() + 64);
    for (index, line) in escaped.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if line.starts_with("@@") {
            write!(out, "<span class=\"tok-hunk\">{line}</span>").unwrap();
        } else if line.starts_with('+') {
            write!(out, "<span class=\"tok-add\">{line}</span>").unwrap();
        } else if line.starts_with('-') {
            write!(out, "<span class=\"tok-del\">{line}</span>").unwrap();
        } else {
            out.push_str(line);
        }
    }
    out
}
