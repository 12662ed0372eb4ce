//! HTML escaping for untrusted text.

/// Reserved control character opening an internal placeholder token.
pub const PLACEHOLDER_OPEN: char = '\u{1}';

/// Reserved control character closing an internal placeholder token.
pub const PLACEHOLDER_CLOSE: char = '\u{2}';

/// Escape text for safe HTML embedding.
///
/// Escapes `&`, `<`, `>`, `"` and `'`. The reserved placeholder control
/// characters are stripped, so escaped text can never collide with an
/// internal placeholder token.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            PLACEHOLDER_OPEN | PLACEHOLDER_CLOSE => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}
