//! Tag filter buttons for the blog index page.

use crate::post::Post;
use crate::utils::html::escape;
use std::collections::HashMap;

/// Label of the synthetic control that clears the filter.
const ALL_LABEL: &str = "すべて";

/// Tag occurrence counts, most frequent first, ties by tag name.
///
/// Tags are compared exactly as written (after trimming), not case-folded.
pub fn tag_counts(posts: &[Post]) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts
}

/// Render the "all" control followed by one control per tag.
pub fn render_tag_filter(posts: &[Post], indent: &str) -> String {
    let mut lines = vec![button(indent, "all", ALL_LABEL, posts.len(), true)];

    for (tag, count) in tag_counts(posts) {
        lines.push(button(indent, tag, tag, count, false));
    }

    lines.join("\n")
}

fn button(indent: &str, tag: &str, label: &str, count: usize, active: bool) -> String {
    let class = if active {
        "tag-filter__btn is-active"
    } else {
        "tag-filter__btn"
    };
    format!(
        r#"{indent}<button type="button" class="{class}" data-tag="{}" aria-pressed="{active}">{} <span class="tag-filter__count">{count}</span></button>"#,
        escape(tag),
        escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::test_support::post;

    #[test]
    fn test_tag_counts_order() {
        let posts = vec![
            post("1", None, &["b", "a"]),
            post("2", None, &["a", "c"]),
            post("3", None, &["c"]),
            post("4", None, &["A"]),
        ];
        assert_eq!(
            tag_counts(&posts),
            vec![("a", 2), ("c", 2), ("A", 1), ("b", 1)]
        );
    }

    #[test]
    fn test_filter_counts_and_all_control() {
        let posts = vec![
            post("1", None, &["a"]),
            post("2", None, &["a", "b"]),
            post("3", None, &[]),
        ];
        let html = render_tag_filter(&posts, "  ");
        let lines: Vec<_> = html.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  <button"));
        assert!(lines[0].contains(r#"data-tag="all""#));
        assert!(lines[0].contains(r#"<span class="tag-filter__count">3</span>"#));
        assert!(lines[1].contains(r#"data-tag="a""#));
        assert!(lines[1].contains(r#"<span class="tag-filter__count">2</span>"#));
        assert!(lines[2].contains(r#"data-tag="b""#));
        assert!(lines[2].contains(r#"<span class="tag-filter__count">1</span>"#));
    }

    #[test]
    fn test_filter_escapes_tags() {
        let html = render_tag_filter(&[post("1", None, &["<c&d>"])], "");
        assert!(html.contains(r#"data-tag="&lt;c&amp;d&gt;""#));
        assert!(html.contains(">&lt;c&amp;d&gt; <span"));
    }

    #[test]
    fn test_filter_with_no_posts() {
        let html = render_tag_filter(&[], "");
        assert_eq!(html.lines().count(), 1);
        assert!(html.contains(r#"<span class="tag-filter__count">0</span>"#));
    }
}
