//! Output escaping for suggestion text
//!
//! Every field value from the suggestion service passes through one of
//! these before it reaches an output: `html` for markup, `terminal` for the
//! TUI.

/// Escape HTML-significant characters to their entity equivalents
pub fn html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Strip control characters so record text cannot drive the terminal
///
/// Tabs and newlines collapse to a single space to keep entries on one line.
pub fn terminal(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
