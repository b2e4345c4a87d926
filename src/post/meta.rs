//! Post metadata from the `<script id="post-meta">` block.
//!
//! Every post page embeds its metadata as a JSON object:
//!
//! ```html
//! <script type="application/json" id="post-meta">
//!   {"title": "...", "description": "...", "date": "2024-03-01",
//!    "cover": "/blog/assets/x.png", "tags": "rust, cli"}
//! </script>
//! ```

use super::{DEFAULT_COVER, DEFAULT_TITLE, Post, post_url};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

static RE_POST_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script[^>]*id=['"]post-meta['"][^>]*>(.*?)</script>"#)
        .expect("post-meta pattern is valid")
});

/// Why a post file was skipped.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("post-meta not found in {0}")]
    NotFound(String),

    #[error("post-meta JSON error in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("post-meta is not an object in {0}")]
    NotObject(String),

    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

/// Fields read from the metadata object. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostMeta {
    #[serde(deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    cover: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    date: Option<String>,
    #[serde(deserialize_with = "deserialize_tags")]
    tags: Vec<String>,
}

/// Accept any JSON value; only non-empty strings count.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().filter(|s| !s.is_empty()).map(str::to_string))
}

/// Tags arrive as `"a, b"` or `["a", "b"]`; anything else means no tags.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_tags(&Value::deserialize(deserializer)?))
}

/// Trim every tag, drop empty ones and repeats, keeping first-seen order.
pub fn normalize_tags(value: &Value) -> Vec<String> {
    let raw: Vec<String> = match value {
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    };

    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Read a post file and extract its record.
pub fn extract_post(path: &Path) -> Result<Post, MetaError> {
    let file = file_name(path);
    let text = std::fs::read_to_string(path).map_err(|source| MetaError::Io {
        file: file.clone(),
        source,
    })?;
    parse_post(&text, &file, path)
}

/// Extract a post record from file text.
///
/// `file` is the bare file name; it names the post in warnings and
/// determines the post URL.
pub fn parse_post(text: &str, file: &str, path: &Path) -> Result<Post, MetaError> {
    let raw = RE_POST_META
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or_else(|| MetaError::NotFound(file.to_string()))?;

    let value: Value = serde_json::from_str(raw).map_err(|source| MetaError::Json {
        file: file.to_string(),
        source,
    })?;
    if !value.is_object() {
        return Err(MetaError::NotObject(file.to_string()));
    }

    // Every field is lenient, so an object always deserializes.
    let meta: PostMeta = serde_json::from_value(value).map_err(|source| MetaError::Json {
        file: file.to_string(),
        source,
    })?;

    Ok(Post {
        has_title: meta.title.is_some(),
        title: meta.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: meta.description.unwrap_or_default(),
        url: post_url(file),
        cover: meta.cover.unwrap_or_else(|| DEFAULT_COVER.to_string()),
        date: meta.date,
        tags: meta.tags,
        path: path.to_path_buf(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
