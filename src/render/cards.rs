//! Post cards for the blog index page.

use crate::post::Post;
use crate::utils::html::escape;

/// Badge shown on every card.
const PILL_LABEL: &str = "記事";
/// Call-to-action label.
const CTA_LABEL: &str = "続きを読む";
/// Appended to the title to form the cover image alt text.
const ALT_SUFFIX: &str = "のヘッダー画像";
/// Stands in for the title in alt text when the post has none.
const ALT_UNTITLED: &str = "記事";

/// Render one card per post, in input order.
///
/// Each `<article>` carries `data-tags` with the comma-joined tag list for
/// client-side filtering.
pub fn render_cards(posts: &[Post], indent: &str) -> String {
    let mut lines = Vec::with_capacity(posts.len() * 16);

    for post in posts {
        let title = escape(&post.title);
        let url = escape(&post.url);
        let cover = escape(&post.cover);
        let date = escape(post.date.as_deref().unwrap_or_default());
        let tags = escape_owned(post.tags.join(","));
        let alt_subject = if post.has_title { post.title.as_str() } else { ALT_UNTITLED };
        let alt = escape_owned(format!("{alt_subject}{ALT_SUFFIX}"));

        lines.push(format!(
            r#"{indent}<article class="card blog-card" data-tags="{tags}">"#
        ));
        lines.push(format!(r#"{indent}  <a class="blog-card__link" href="{url}">"#));
        lines.push(format!(r#"{indent}    <div class="blog-card__media">"#));
        lines.push(format!(
            r#"{indent}      <img class="blog-card__image" src="{cover}" alt="{alt}" loading="lazy" />"#
        ));
        lines.push(format!("{indent}    </div>"));
        lines.push(format!(r#"{indent}    <div class="stack">"#));
        lines.push(format!(r#"{indent}      <div class="blog-card__meta">"#));
        lines.push(format!("{indent}        <span>{date}</span>"));
        lines.push(format!(
            r#"{indent}        <span class="pill">{PILL_LABEL}</span>"#
        ));
        lines.push(format!("{indent}      </div>"));
        lines.push(format!(r#"{indent}      <h3 class="blog-card__title">{title}</h3>"#));
        if !post.description.is_empty() {
            lines.push(format!(
                r#"{indent}      <p class="muted">{}</p>"#,
                escape(&post.description)
            ));
        }
        lines.push(format!(
            r#"{indent}      <span class="btn btn--ghost btn--sm blog-card__cta">{CTA_LABEL}</span>"#
        ));
        lines.push(format!("{indent}    </div>"));
        lines.push(format!("{indent}  </a>"));
        lines.push(format!("{indent}</article>"));
    }

    lines.join("\n")
}

fn escape_owned(s: String) -> String {
    escape(&s).into_owned()
}
