//! Blog post records.
//!
//! A [`Post`] is built from the `post-meta` JSON block embedded in a
//! pre-rendered HTML file ([`meta`]), and the whole set of posts is gathered
//! and ordered by [`collect`].

pub mod collect;
pub mod meta;

pub use collect::{Collected, collect_posts};
pub use meta::extract_post;

use crate::utils::date::DateTimeUtc;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Site path under which post files are served.
pub const POSTS_URL_PREFIX: &str = "/blog/posts/";

/// Title used when the metadata has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Cover image used when the metadata has none.
pub const DEFAULT_COVER: &str = "/blog/assets/blog-hero.svg";

/// One blog post, as written to `posts.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub title: String,
    /// False when `title` is the placeholder.
    #[serde(skip)]
    pub has_title: bool,
    pub description: String,
    /// Always derived from the file name, never taken from the metadata.
    pub url: String,
    pub cover: String,
    /// Raw date string as written in the metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub tags: Vec<String>,
    /// Source file, used to write related-post blocks back.
    #[serde(skip)]
    pub path: PathBuf,
}

impl Post {
    /// Parsed publication date; `None` when absent or malformed.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse_date)
    }

    /// Lowercased tag set used for related-post scoring.
    pub fn tag_set(&self) -> BTreeSet<String> {
        self.tags
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

/// Site URL for a post file name.
pub fn post_url(file_name: &str) -> String {
    format!("{POSTS_URL_PREFIX}{file_name}")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a post for renderer tests.
    pub fn post(name: &str, date: Option<&str>, tags: &[&str]) -> Post {
        Post {
            title: format!("Title {name}"),
            has_title: true,
            description: String::new(),
            url: post_url(&format!("{name}.html")),
            cover: DEFAULT_COVER.to_string(),
            date: date.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            path: PathBuf::from(format!("{name}.html")),
        }
    }
}
