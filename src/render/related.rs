//! "Related posts" blocks spliced into each post page.
//!
//! Candidates are ranked by shared-tag score: the size of the intersection of
//! lowercased tag sets, unweighted by set size. Ties go to the newer post.
//! When tag overlap yields fewer than [`MAX_RELATED`] posts, the newest
//! remaining posts fill the gap.

use crate::post::Post;
use crate::utils::html::escape;
use std::cmp::Reverse;

/// Upper bound on cards per block.
pub const MAX_RELATED: usize = 3;

/// Target of the fallback card when nothing else is related.
const BLOG_LIST_URL: &str = "/blog/";
const BLOG_LIST_LABEL: &str = "ブログ一覧へ";
const BLOG_LIST_DESCRIPTION: &str = "ほかの記事はブログ一覧からどうぞ。";

/// Pick up to [`MAX_RELATED`] posts related to `base`.
///
/// `posts` must already be sorted newest first; that order is the final
/// tie-break and drives the recency fallback.
pub fn related_posts<'a>(base: &Post, posts: &'a [Post]) -> Vec<&'a Post> {
    let base_tags = base.tag_set();

    let mut scored: Vec<(usize, &Post)> = posts
        .iter()
        .filter(|post| post.url != base.url)
        .map(|post| (post.tag_set().intersection(&base_tags).count(), post))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable: equal score and date keep collection order.
    scored.sort_by_key(|(score, post)| (Reverse(*score), Reverse(post.parsed_date())));

    let mut selected: Vec<&Post> = scored
        .into_iter()
        .take(MAX_RELATED)
        .map(|(_, post)| post)
        .collect();

    for post in posts {
        if selected.len() >= MAX_RELATED {
            break;
        }
        if post.url != base.url && !selected.iter().any(|s| s.url == post.url) {
            selected.push(post);
        }
    }

    selected
}

/// Render the related-posts block for `base`.
///
/// Falls back to a single card linking the blog listing when the collection
/// holds no other post.
pub fn render_related(base: &Post, posts: &[Post], indent: &str) -> String {
    let related = related_posts(base, posts);
    if related.is_empty() {
        return card(
            indent,
            BLOG_LIST_URL,
            BLOG_LIST_LABEL,
            BLOG_LIST_DESCRIPTION,
            None,
        );
    }

    related
        .into_iter()
        .map(|post| {
            card(
                indent,
                &post.url,
                &post.title,
                &post.description,
                post.date.as_deref(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn card(indent: &str, url: &str, title: &str, description: &str, date: Option<&str>) -> String {
    let mut lines = vec![
        format!(r#"{indent}<a class="related-card" href="{}">"#, escape(url)),
        format!(
            r#"{indent}  <span class="related-card__title">{}</span>"#,
            escape(title)
        ),
    ];
    if !description.is_empty() {
        lines.push(format!(
            r#"{indent}  <span class="related-card__desc muted">{}</span>"#,
            escape(description)
        ));
    }
    if let Some(date) = date.filter(|d| !d.is_empty()) {
        lines.push(format!(
            r#"{indent}  <time class="related-card__date">{}</time>"#,
            escape(date)
        ));
    }
    lines.push(format!("{indent}</a>"));
    lines.join("\n")
}
