//! `[build]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input and output locations.
///
/// `public` is relative to the working directory; every other path is
/// relative to `public`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Published site root.
    pub public: PathBuf,
    /// Directory of pre-rendered post files.
    pub posts: PathBuf,
    /// Blog index page holding the card list, tag filter and ItemList.
    pub index: PathBuf,
    /// JSON manifest of all posts.
    pub manifest: PathBuf,
    /// RSS feed output.
    pub feed: PathBuf,
    /// Sitemap output.
    pub sitemap: PathBuf,
    /// Robots file output.
    pub robots: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            posts: "blog/posts".into(),
            index: "blog/index.html".into(),
            manifest: "blog/posts.json".into(),
            feed: "blog/feed.xml".into(),
            sitemap: "sitemap.xml".into(),
            robots: "robots.txt".into(),
        }
    }
}
