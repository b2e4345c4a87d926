//! schema.org `ItemList` structured data for the blog index.

use crate::post::Post;
use crate::utils::html::{escape_script_json, indent_lines};
use crate::utils::url::to_absolute;
use serde_json::{Value, json};

/// Build the `ItemList` document, positions starting at 1.
pub fn item_list(posts: &[Post], base_url: &str) -> Value {
    let elements: Vec<Value> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": post.title,
                "url": to_absolute(base_url, &post.url),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "itemListElement": elements,
    })
}

/// Render the `ItemList` wrapped in a JSON-LD script element.
pub fn render_item_list(posts: &[Post], base_url: &str, indent: &str) -> String {
    // Serializing a `Value` cannot fail.
    let body = serde_json::to_string_pretty(&item_list(posts, base_url)).unwrap_or_default();
    let body = escape_script_json(&body);

    [
        format!(r#"{indent}<script type="application/ld+json">"#),
        indent_lines(&body, indent),
        format!("{indent}</script>"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::test_support::post;

    #[test]
    fn test_item_list_document() {
        let posts = vec![post("b", None, &[]), post("a", None, &[])];
        let doc = item_list(&posts, "https://example.com/");

        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "ItemList");
        let items = doc["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Title b");
        assert_eq!(items[0]["url"], "https://example.com/blog/posts/b.html");
        assert_eq!(items[1]["position"], 2);
    }

    #[test]
    fn test_render_keeps_key_order_and_indent() {
        let html = render_item_list(&[post("a", None, &[])], "https://example.com", "  ");
        let lines: Vec<_> = html.lines().collect();

        assert_eq!(lines[0], r#"  <script type="application/ld+json">"#);
        assert_eq!(lines[1], "  {");
        assert_eq!(lines[2], r#"    "@context": "https://schema.org","#);
        assert_eq!(*lines.last().unwrap(), "  </script>");
        assert!(lines.iter().all(|line| line.starts_with("  ")));
    }

    #[test]
    fn test_render_cannot_close_script_early() {
        let mut p = post("a", None, &[]);
        p.title = "</script><b>".to_string();
        let html = render_item_list(&[p], "https://example.com", "");

        assert_eq!(html.matches("</script>").count(), 1);
        assert!(html.contains(r#""name": "\u003c/script\u003e\u003cb\u003e""#));
    }

    #[test]
    fn test_render_hides_comment_markers_in_titles() {
        let mut p = post("a", None, &[]);
        p.title = "How <!-- TAG_FILTER_START --> works".to_string();
        let html = render_item_list(&[p], "https://example.com", "");

        assert!(!html.contains("<!--"));
        assert!(!html.contains("TAG_FILTER_START -->"));
        assert!(html.contains(r#""name": "How \u003c!-- TAG_FILTER_START --\u003e works""#));
    }

    #[test]
    fn test_empty_list() {
        let doc = item_list(&[], "https://example.com");
        assert_eq!(doc["itemListElement"], json!([]));
    }
}
