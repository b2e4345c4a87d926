//! RSS 2.0 feed generation.
//!
//! Every collected post becomes an item, in collection order. Posts without
//! a usable date are stamped with the build time.

use crate::{
    config::SiteInfoConfig,
    post::Post,
    utils::{date::DateTimeUtc, url::to_absolute},
};
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

/// Site path the channel links to.
const BLOG_URL_PATH: &str = "/blog/";

/// Publication hour (UTC) given to dated posts.
const PUBLISH_HOUR: u8 = 9;

const GENERATOR: &str = "blogsplice";

/// Render the feed document.
///
/// `now` stamps `lastBuildDate` and undated items.
pub fn render_feed(posts: &[Post], site: &SiteInfoConfig, now: DateTimeUtc) -> Result<String> {
    let items: Vec<_> = posts
        .iter()
        .map(|post| post_to_rss_item(post, &site.url, now))
        .collect();

    let channel = ChannelBuilder::default()
        .title(&site.title)
        .link(to_absolute(&site.url, BLOG_URL_PATH))
        .description(&site.description)
        .language(Some(site.language.clone()))
        .last_build_date(Some(now.to_rfc2822()))
        .generator(GENERATOR.to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn post_to_rss_item(post: &Post, base_url: &str, now: DateTimeUtc) -> rss::Item {
    let link = to_absolute(base_url, &post.url);
    let pub_date = post
        .parsed_date()
        .map_or(now, |date| date.at(PUBLISH_HOUR, 0, 0))
        .to_rfc2822();

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.description.clone())
        .pub_date(pub_date)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::test_support::post;

    const NOW: DateTimeUtc = DateTimeUtc::new(2024, 6, 15, 14, 30, 45);

    fn site() -> SiteInfoConfig {
        SiteInfoConfig {
            url: "https://example.com/".to_string(),
            ..SiteInfoConfig::default()
        }
    }

    #[test]
    fn test_item_for_dated_post() {
        let mut p = post("a", Some("2024-01-15"), &[]);
        p.description = "A test summary".to_string();

        let item = post_to_rss_item(&p, "https://example.com", NOW);
        assert_eq!(item.title(), Some("Title a"));
        assert_eq!(item.link(), Some("https://example.com/blog/posts/a.html"));
        assert_eq!(item.description(), Some("A test summary"));
        assert_eq!(item.pub_date(), Some("Mon, 15 Jan 2024 09:00:00 GMT"));

        let guid = item.guid().unwrap();
        assert!(guid.is_permalink());
        assert_eq!(guid.value(), "https://example.com/blog/posts/a.html");
    }

    #[test]
    fn test_undated_item_uses_build_time() {
        let item = post_to_rss_item(&post("a", Some("someday"), &[]), "https://example.com", NOW);
        assert_eq!(item.pub_date(), Some("Sat, 15 Jun 2024 14:30:45 GMT"));
    }

    #[test]
    fn test_render_feed_channel() {
        let posts = vec![
            post("new", Some("2024-03-01"), &[]),
            post("old", Some("2024-01-01"), &[]),
        ];
        let xml = render_feed(&posts, &site(), NOW).unwrap();

        assert!(xml.contains("<title>Winter Gator Blog</title>"));
        assert!(xml.contains("<link>https://example.com/blog/</link>"));
        assert!(xml.contains("<description>Winter Gator のブログ更新情報</description>"));
        assert!(xml.contains("<language>ja</language>"));
        assert!(xml.contains("<lastBuildDate>Sat, 15 Jun 2024 14:30:45 GMT</lastBuildDate>"));
        assert!(xml.contains("<generator>blogsplice</generator>"));
        assert_eq!(xml.matches("<item>").count(), 2);
        assert!(xml.find("new.html").unwrap() < xml.find("old.html").unwrap());
    }

    #[test]
    fn test_render_feed_escapes_text() {
        let mut p = post("a", None, &[]);
        p.title = "Fish & <Chips>".to_string();
        let xml = render_feed(&[p], &site(), NOW).unwrap();
        assert!(xml.contains("Fish &amp; &lt;Chips&gt;"));
    }

    #[test]
    fn test_render_feed_empty() {
        let xml = render_feed(&[], &site(), NOW).unwrap();
        assert!(xml.contains("<channel>"));
        assert!(!xml.contains("<item>"));
    }
}
