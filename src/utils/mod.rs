//! Shared helpers: dates, HTML escaping, URL joining.

pub mod date;
pub mod html;
pub mod url;

/// Format count with noun, handling pluralization
///
/// `plural_count(1, "post")` -> `"1 post"`, `plural_count(3, "post")` -> `"3 posts"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
