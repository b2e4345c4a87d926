//! `[site]` configuration.
//!
//! Metadata for the RSS channel and the base of every absolute URL.

use serde::{Deserialize, Serialize};

/// Site metadata for feed generation and absolute links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site URL, may carry a path (e.g., "https://example.com/sub").
    pub url: String,

    /// Feed channel title.
    pub title: String,

    /// Feed channel description.
    pub description: String,

    /// Language code (e.g., "ja", "en").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: "https://wintergator.com".into(),
            title: "Winter Gator Blog".into(),
            description: "Winter Gator のブログ更新情報".into(),
            language: "ja".into(),
        }
    }
}
