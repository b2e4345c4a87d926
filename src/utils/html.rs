//! HTML utility functions.
//!
//! - `escape()` - HTML entity escaping for text and attribute values
//! - `escape_script_json()` - make JSON safe to inline in a `<script>` element
//! - `indent_lines()` - prefix every line of a block with an indentation string

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content and attribute values.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Characters rewritten as `\uXXXX` inside inline JSON.
const SCRIPT_JSON_CHARS: [char; 3] = ['<', '>', '&'];

/// Make serialized JSON inert inside a `<script>` element.
///
/// These characters can only occur inside JSON strings, where the `\uXXXX`
/// form decodes to the same value. The output never contains `</script`,
/// `<!--` or a splice marker.
#[inline]
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains(SCRIPT_JSON_CHARS) {
        return Cow::Borrowed(json);
    }

    let mut result = String::with_capacity(json.len() + 16);
    for c in json.chars() {
        match c {
            '<' => result.push_str("\\u003c"),
            '>' => result.push_str("\\u003e"),
            '&' => result.push_str("\\u0026"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Prefix every line of `block` with `indent`.
pub fn indent_lines(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
