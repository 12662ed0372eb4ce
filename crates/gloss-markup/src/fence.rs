//! Code fence scanning, balancing and segmentation.
//!
//! Model output does not reliably terminate its code fences. Everything
//! downstream assumes balanced fences, so the scanner appends a synthetic
//! closing fence when the document would otherwise leave one open.

/// Detect a full-line code fence marker.
///
/// A marker line is optional leading whitespace, three or more backticks,
/// then an info string that contains no further backticks. Returns the
/// trimmed info string.
pub(crate) fn fence_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let backticks = trimmed.chars().take_while(|&c| c == '`').count();
    if backticks < 3 {
        return None;
    }
    let info = &trimmed[backticks..];
    if info.contains('`') {
        return None;
    }
    Some(info.trim())
}

/// Append a synthetic closing fence if the document leaves a fence open.
///
/// Every marker line toggles fence state, so an odd number of markers means
/// the final fence never closes and a greedy scan would swallow the rest of
/// the document. Returns true if a repair was made.
pub(crate) fn balance(markdown: &mut String) -> bool {
    let mut open = false;
    for line in markdown.lines() {
        if fence_marker(line).is_some() {
            open = !open;
        }
    }
    if open {
        if !markdown.ends_with('\n') {
            markdown.push('\n');
        }
        markdown.push_str("```");
    }
    open
}

/// A top-level slice of the document: fenced code or everything else.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    Text(String),
    Code { info: String, code: String },
}

/// Split a document into text and code segments.
///
/// Opening markers contribute their info string; info on a closing marker
/// is discarded. Input should be balanced first, but an unterminated final
/// fence is still finalized as a code segment.
pub(crate) fn split_segments(markdown: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut open: Option<(String, Vec<&str>)> = None;

    for line in markdown.lines() {
        if let Some(marker_info) = fence_marker(line) {
            match open.take() {
                Some((info, lines)) => {
                    segments.push(Segment::Code {
                        info,
                        code: lines.join("\n"),
                    });
                }
                None => {
                    if !text.is_empty() {
                        segments.push(Segment::Text(std::mem::take(&mut text)));
                    }
                    open = Some((marker_info.to_owned(), Vec::new()));
                }
            }
        } else if let Some((_, lines)) = &mut open {
            lines.push(line);
        } else {
            text.push_str(line);
            text.push('\n');
        }
    }

    if let Some((info, lines)) = open {
        segments.push(Segment::Code {
            info,
            code: lines.join("\n"),
        });
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_with_info() {
        assert_eq!(fence_marker("```js"), Some("js"));
        assert_eq!(fence_marker("``` rust "), Some("rust"));
        assert_eq!(fence_marker("```"), Some(""));
    }

    #[test]
    fn test_marker_indented() {
        assert_eq!(fence_marker("  ```python"), Some("python"));
    }

    #[test]
    fn test_marker_requires_three_backticks() {
        assert_eq!(fence_marker("``js"), None);
        assert_eq!(fence_marker("`code`"), None);
    }

    #[test]
    fn test_marker_rejects_inline_code_line() {
        // A single line carrying its own closing backticks is not a fence
        assert_eq!(fence_marker("```js const x = 1;```"), None);
    }

    #[test]
    fn test_longer_fences_are_markers() {
        assert_eq!(fence_marker("````"), Some(""));
    }

    #[test]
    fn test_balance_leaves_closed_fences_alone() {
        let mut text = "```js\nlet x;\n```".to_owned();
        assert!(!balance(&mut text));
        assert_eq!(text, "```js\nlet x;\n```");
    }

    #[test]
    fn test_balance_appends_missing_terminator() {
        let mut text = "```js\nlet x;".to_owned();
        assert!(balance(&mut text));
        assert_eq!(text, "```js\nlet x;\n```");
    }

    #[test]
    fn test_balance_odd_marker_count() {
        let mut text = "```js\na\n```\ntext\n```\nb".to_owned();
        assert!(balance(&mut text));
        assert!(text.ends_with("\n```"));
    }

    #[test]
    fn test_split_text_and_code() {
        let segments = split_segments("before\n```js\nlet x;\n```\nafter\n");
        assert_eq!(
            segments,
            vec![
                Segment::Text("before\n".to_owned()),
                Segment::Code {
                    info: "js".to_owned(),
                    code: "let x;".to_owned(),
                },
                Segment::Text("after\n".to_owned()),
            ]
        );
    }

    #[test]
    fn test_split_discards_closing_info() {
        // Any marker line closes an open fence; its info string is dropped
        let segments = split_segments("```js\nlet x;\n```python");
        assert_eq!(
            segments,
            vec![Segment::Code {
                info: "js".to_owned(),
                code: "let x;".to_owned(),
            }]
        );
    }

    #[test]
    fn test_split_markers_toggle() {
        let segments = split_segments("```js\nlet x;\n```python\ncode\n```");
        assert_eq!(
            segments,
            vec![
                Segment::Code {
                    info: "js".to_owned(),
                    code: "let x;".to_owned(),
                },
                Segment::Text("code\n".to_owned()),
                Segment::Code {
                    info: String::new(),
                    code: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_split_finalizes_unterminated_fence() {
        let segments = split_segments("```\ndangling");
        assert_eq!(
            segments,
            vec![Segment::Code {
                info: String::new(),
                code: "dangling".to_owned(),
            }]
        );
    }

    #[test]
    fn test_split_multiline_code_preserved() {
        let segments = split_segments("```python\ndef f():\n    return 1\n```");
        assert_eq!(
            segments,
            vec![Segment::Code {
                info: "python".to_owned(),
                code: "def f():\n    return 1".to_owned(),
            }]
        );
    }
}
