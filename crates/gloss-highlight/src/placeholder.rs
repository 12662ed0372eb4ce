//! Stash table used to protect annotated spans from later passes.

use gloss_markup::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

use crate::HighlightError;

/// Holds annotated markup out of band while regex passes run over the
/// remaining text.
///
/// Each stashed entry is replaced by a token of the form `\u{1}<id>\u{2}`.
/// The two control characters never occur in escaped input (the escaper
/// strips them), so a token can only have been produced by this table.
pub(crate) struct PlaceholderTable {
    entries: Vec<String>,
}

impl PlaceholderTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores `markup` and returns the token standing in for it.
    pub(crate) fn stash(&mut self, markup: String) -> String {
        let id = self.entries.len();
        self.entries.push(markup);
        format!("{PLACEHOLDER_OPEN}{id}{PLACEHOLDER_CLOSE}")
    }

    /// Substitutes every token with its stashed markup.
    ///
    /// Entries are expanded newest-first. A later pass can capture an
    /// earlier token inside its own match (a comment token swallowed by a
    /// string span, for instance), and the capturing entry always has the
    /// higher id, so one descending sweep resolves all nesting. Every entry
    /// must surface exactly once; anything else means a pass corrupted a
    /// token.
    pub(crate) fn restore_all(&self, mut text: String) -> Result<String, HighlightError> {
        for (id, entry) in self.entries.iter().enumerate().rev() {
            let token = format!("{PLACEHOLDER_OPEN}{id}{PLACEHOLDER_CLOSE}");
            if !text.contains(&token) {
                return Err(HighlightError::UnresolvedPlaceholder(id));
            }
            text = text.replace(&token, entry);
        }
        if text.contains(PLACEHOLDER_OPEN) || text.contains(PLACEHOLDER_CLOSE) {
            return Err(HighlightError::TokenLeak);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stash_returns_sequential_tokens() {
        let mut table = PlaceholderTable::new();
        assert_eq!(table.stash("a".to_owned()), "\u{1}0\u{2}");
        assert_eq!(table.stash("b".to_owned()), "\u{1}1\u{2}");
    }

    #[test]
    fn test_restore_flat_tokens() {
        let mut table = PlaceholderTable::new();
        let first = table.stash("<x>".to_owned());
        let second = table.stash("<y>".to_owned());
        let restored = table
            .restore_all(format!("{first} and {second}"))
            .unwrap();
        assert_eq!(restored, "<x> and <y>");
    }

    #[test]
    fn test_restore_nested_tokens() {
        let mut table = PlaceholderTable::new();
        let inner = table.stash("inner".to_owned());
        let outer = table.stash(format!("[{inner}]"));
        let restored = table.restore_all(outer).unwrap();
        assert_eq!(restored, "[inner]");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let mut table = PlaceholderTable::new();
        let _ = table.stash("lost".to_owned());
        let result = table.restore_all("no tokens here".to_owned());
        assert!(matches!(
            result,
            Err(HighlightError::UnresolvedPlaceholder(0))
        ));
    }

    #[test]
    fn test_stray_control_character_is_an_error() {
        let table = PlaceholderTable::new();
        let result = table.restore_all("dangling \u{1} byte".to_owned());
        assert!(matches!(result, Err(HighlightError::TokenLeak)));
    }
}
