//! Marker-based in-place regeneration of file regions.
//!
//! A region is delimited by a pair of sentinel comments:
//!
//! ```html
//!     <!-- BLOG_LIST_START -->
//!     ...generated...
//!     <!-- BLOG_LIST_END -->
//! ```
//!
//! Splicing replaces everything between the first start marker and the first
//! end marker after it, re-emits both markers verbatim, and leaves every other
//! byte of the file untouched. Duplicated markers resolve to the first match.

use thiserror::Error;

/// A pair of sentinel strings delimiting a generated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: &'static str,
    pub end: &'static str,
}

impl Markers {
    pub const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }
}

pub const BLOG_LIST: Markers = Markers::new("<!-- BLOG_LIST_START -->", "<!-- BLOG_LIST_END -->");
pub const TAG_FILTER: Markers =
    Markers::new("<!-- TAG_FILTER_START -->", "<!-- TAG_FILTER_END -->");
pub const ITEM_LIST: Markers =
    Markers::new("<!-- BLOG_ITEMLIST_START -->", "<!-- BLOG_ITEMLIST_END -->");
pub const RELATED_POSTS: Markers =
    Markers::new("<!-- RELATED_POSTS_START -->", "<!-- RELATED_POSTS_END -->");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("markers {start} / {end} not found")]
    MarkersNotFound {
        start: &'static str,
        end: &'static str,
    },
}

/// Leading whitespace of the line holding the first start marker.
///
/// Empty when anything other than spaces or tabs precedes the marker.
pub fn marker_indent<'a>(text: &'a str, markers: &Markers) -> Option<&'a str> {
    let pos = text.find(markers.start)?;
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..pos];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        Some(prefix)
    } else {
        Some("")
    }
}

/// Replace the region between `markers` with `render(indent)`.
///
/// The renderer receives the inferred indentation so every line it produces
/// lines up with the start marker.
pub fn splice_with<F>(text: &str, markers: &Markers, render: F) -> Result<String, SpliceError>
where
    F: FnOnce(&str) -> String,
{
    let not_found = || SpliceError::MarkersNotFound {
        start: markers.start,
        end: markers.end,
    };

    let start = text.find(markers.start).ok_or_else(not_found)?;
    let after_start = start + markers.start.len();
    let end = text[after_start..]
        .find(markers.end)
        .map(|offset| after_start + offset)
        .ok_or_else(not_found)?;

    let indent = marker_indent(text, markers).unwrap_or("");
    let block = render(indent);

    let mut out = String::with_capacity(text.len() + block.len());
    out.push_str(&text[..after_start]);
    out.push('\n');
    out.push_str(&block);
    out.push('\n');
    out.push_str(indent);
    out.push_str(&text[end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::html::indent_lines;
    use indoc::indoc;

    const M: Markers = Markers::new("<!-- S -->", "<!-- E -->");

    fn splice(text: &str, markers: &Markers, block: &str) -> Result<String, SpliceError> {
        splice_with(text, markers, |indent| indent_lines(block, indent))
    }

    #[test]
    fn test_splice_replaces_region_and_keeps_surroundings() {
        let text = indoc! {"
            <main>
              <!-- S -->
              <p>old</p>
              <!-- E -->
            </main>
        "};

        let out = splice(text, &M, "<p>new</p>\n<p>two</p>").unwrap();
        assert_eq!(
            out,
            indoc! {"
                <main>
                  <!-- S -->
                  <p>new</p>
                  <p>two</p>
                  <!-- E -->
                </main>
            "}
        );
    }

    #[test]
    fn test_splice_is_idempotent() {
        let text = "head\n\t<!-- S --><!-- E -->\ntail\n";
        let once = splice(text, &M, "x").unwrap();
        let twice = splice(&once, &M, "x").unwrap();
        assert_eq!(once, "head\n\t<!-- S -->\n\tx\n\t<!-- E -->\ntail\n");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_outside_bytes_untouched() {
        let before = "a\r\nb <b>kept</b>\n  ";
        let after = " trailing \u{3042}\n";
        let text = format!("{before}<!-- S -->junk<!-- E -->{after}");
        let out = splice(&text, &M, "new").unwrap();
        assert!(out.starts_with(&format!("{before}<!-- S -->")));
        assert!(out.ends_with(&format!("<!-- E -->{after}")));
    }

    #[test]
    fn test_inline_marker_has_no_indent() {
        let text = "<div><!-- S --><!-- E --></div>";
        assert_eq!(marker_indent(text, &M), Some(""));
        assert_eq!(
            splice(text, &M, "x").unwrap(),
            "<div><!-- S -->\nx\n<!-- E --></div>"
        );
    }

    #[test]
    fn test_missing_markers() {
        let err = splice("<!-- S --> only", &M, "x").unwrap_err();
        assert_eq!(
            err,
            SpliceError::MarkersNotFound {
                start: "<!-- S -->",
                end: "<!-- E -->"
            }
        );
        assert!(splice("<!-- E --> only", &M, "x").is_err());
    }

    #[test]
    fn test_end_before_start_is_missing() {
        assert!(splice("<!-- E -->\n<!-- S -->\n", &M, "x").is_err());
    }

    #[test]
    fn test_duplicate_markers_use_first_match() {
        let text = "<!-- S -->a<!-- E -->|<!-- S -->b<!-- E -->";
        assert_eq!(
            splice(text, &M, "x").unwrap(),
            "<!-- S -->\nx\n<!-- E -->|<!-- S -->b<!-- E -->"
        );
    }

    #[test]
    fn test_splice_with_receives_indent() {
        let text = "    <!-- S --><!-- E -->";
        let out = splice_with(text, &M, |indent| format!("{indent}[{}]", indent.len())).unwrap();
        assert_eq!(out, "    <!-- S -->\n    [4]\n    <!-- E -->");
    }
}
