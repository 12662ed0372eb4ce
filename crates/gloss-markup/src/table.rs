//! Pipe table row parsing.

use crate::node::Alignment;

/// Whether a line could be a table row.
///
/// The decision to treat it as one belongs to the caller: a candidate only
/// becomes a table when a separator row follows the header.
pub(crate) fn is_candidate(line: &str) -> bool {
    line.contains('|')
}

/// Split a table row into trimmed cells.
///
/// One leading and one trailing boundary pipe are stripped so
/// `| a | b |` yields two cells, not four.
pub(crate) fn parse_row(line: &str) -> Vec<String> {
    let mut row = line.trim();
    row = row.strip_prefix('|').unwrap_or(row);
    row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(|cell| cell.trim().to_owned()).collect()
}

/// Whether a line is a header separator row such as `| --- | :---: |`.
pub(crate) fn is_separator_row(line: &str) -> bool {
    let trimmed = line.trim();
    if !is_candidate(trimmed) || !trimmed.contains('-') {
        return false;
    }
    parse_row(trimmed).iter().all(|cell| is_separator_cell(cell))
}

fn is_separator_cell(cell: &str) -> bool {
    let dashes = cell.strip_prefix(':').unwrap_or(cell);
    let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
    !dashes.is_empty() && dashes.chars().all(|c| c == '-')
}

/// Parse cell alignment from a separator cell.
pub(crate) fn parse_alignment(cell: &str) -> Alignment {
    match (cell.starts_with(':'), cell.ends_with(':')) {
        (true, true) => Alignment::Center,
        (false, true) => Alignment::Right,
        _ => Alignment::Left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_strips_boundary_pipes() {
        assert_eq!(parse_row("| a | b |"), vec!["a", "b"]);
        assert_eq!(parse_row("a | b"), vec!["a", "b"]);
        assert_eq!(parse_row("|x|"), vec!["x"]);
    }

    #[test]
    fn test_parse_row_keeps_interior_empty_cells() {
        assert_eq!(parse_row("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_separator_row_detection() {
        assert!(is_separator_row("| --- | --- |"));
        assert!(is_separator_row("|:---:|---:|"));
        assert!(is_separator_row("--- | ---"));
        assert!(!is_separator_row("| a | b |"));
        assert!(!is_separator_row("just text"));
        assert!(!is_separator_row("|"));
    }

    #[test]
    fn test_alignment_markers() {
        assert_eq!(parse_alignment("---"), Alignment::Left);
        assert_eq!(parse_alignment(":---"), Alignment::Left);
        assert_eq!(parse_alignment("---:"), Alignment::Right);
        assert_eq!(parse_alignment(":---:"), Alignment::Center);
    }
}
