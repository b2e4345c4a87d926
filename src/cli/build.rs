//! Blog build orchestration.
//!
//! Build pipeline phases:
//! - **Collect** - Extract and sort every post under the posts directory
//! - **Manifest** - Write `posts.json`
//! - **Index** - Splice cards, ItemList and tag filter into the blog index
//! - **Related** - Splice related-post cards into every post file
//! - **Syndicate** - Write feed, sitemap and robots
//!
//! Only a missing posts directory or a failed write aborts the run. Marker
//! problems are warned about as they happen; per-post problems are deferred
//! to the closing warnings block.

use crate::{
    config::SiteConfig,
    debug,
    generator::{render_feed, render_robots, render_sitemap},
    log,
    post::{Collected, Post, collect_posts},
    render::{render_cards, render_item_list, render_related, render_tag_filter},
    splice::{self, BLOG_LIST, ITEM_LIST, Markers, RELATED_POSTS, TAG_FILTER},
    utils::{date::DateTimeUtc, plural_count},
    warn,
};
use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that stop the build before anything is written.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("posts dir not found: {}", .0.display())]
    PostsDirMissing(PathBuf),
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub posts: Vec<Post>,
    /// Deferred per-post warnings for the closing block.
    pub warnings: Vec<String>,
}

/// Build every blog artifact.
///
/// Pipeline: collect -> manifest -> index -> related -> feed -> sitemap -> robots
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    build_site_at(config, DateTimeUtc::now())
}

fn build_site_at(config: &SiteConfig, now: DateTimeUtc) -> Result<BuildReport> {
    let posts_dir = config.public_join(&config.build.posts);
    if !posts_dir.is_dir() {
        return Err(BuildError::PostsDirMissing(posts_dir).into());
    }

    for warning in config.validate() {
        warn!("config"; "{}", warning);
    }

    let Collected {
        posts,
        mut warnings,
    } = collect_posts(&posts_dir);
    debug!("build"; "collected {} from {}", plural_count(posts.len(), "post"), posts_dir.display());

    write_manifest(config, &posts)?;
    update_blog_index(config, &posts)?;
    update_related_posts(&posts)?;

    write_feed(config, &posts, now, &mut warnings)?;
    write_sitemap(config, &posts)?;
    write_robots(config)?;

    Ok(BuildReport { posts, warnings })
}

// ============================================================================
// Manifest
// ============================================================================

fn write_manifest(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    let path = config.public_join(&config.build.manifest);
    let mut json = serde_json::to_string_pretty(posts).context("Failed to serialize posts")?;
    json.push('\n');

    write_output(&path, &json)?;
    log!("build"; "wrote {} ({})", path.display(), plural_count(posts.len(), "post"));
    Ok(())
}

// ============================================================================
// Splicing
// ============================================================================

/// Splice the card list, ItemList and tag filter into the blog index.
fn update_blog_index(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    let path = config.public_join(&config.build.index);
    let Some(original) = read_if_exists(&path)? else {
        warn!("splice"; "blog index not found: {}", path.display());
        return Ok(());
    };

    let base_url = config.base_url();
    let mut text = original.clone();
    splice_section(&mut text, &path, &BLOG_LIST, |indent| render_cards(posts, indent));
    splice_section(&mut text, &path, &ITEM_LIST, |indent| {
        render_item_list(posts, base_url, indent)
    });
    splice_section(&mut text, &path, &TAG_FILTER, |indent| {
        render_tag_filter(posts, indent)
    });

    if write_if_changed(&path, &original, &text)? {
        log!("splice"; "updated {}", path.display());
    } else {
        debug!("splice"; "unchanged {}", path.display());
    }
    Ok(())
}

/// Splice a related-posts block into each post's own file.
fn update_related_posts(posts: &[Post]) -> Result<()> {
    let mut updated = 0;

    for post in posts {
        // The file may have been removed since collection.
        let Some(original) = read_if_exists(&post.path)? else {
            continue;
        };

        let mut text = original.clone();
        splice_section(&mut text, &post.path, &RELATED_POSTS, |indent| {
            render_related(post, posts, indent)
        });

        if write_if_changed(&post.path, &original, &text)? {
            updated += 1;
        }
    }

    if updated > 0 {
        log!("splice"; "updated related posts in {}", plural_count(updated, "file"));
    }
    Ok(())
}

/// Apply one splice in place; a missing marker pair is warned about and
/// leaves `text` untouched.
fn splice_section<F>(text: &mut String, path: &Path, markers: &Markers, render: F)
where
    F: FnOnce(&str) -> String,
{
    match splice::splice_with(text, markers, render) {
        Ok(spliced) => *text = spliced,
        Err(e) => {
            warn!("splice"; "{} in {}", e, path.display());
        }
    }
}

// ============================================================================
// Feed / Sitemap / Robots
// ============================================================================

/// A feed that fails validation is skipped with a warning; a failed write
/// is fatal.
fn write_feed(
    config: &SiteConfig,
    posts: &[Post],
    now: DateTimeUtc,
    warnings: &mut Vec<String>,
) -> Result<()> {
    let path = config.public_join(&config.build.feed);
    let xml = match render_feed(posts, &config.site, now) {
        Ok(xml) => xml,
        Err(e) => {
            warnings.push(format!("feed not written: {e:#}"));
            return Ok(());
        }
    };

    write_output(&path, &xml)?;
    log!("feed"; "wrote {}", path.display());
    Ok(())
}

fn write_sitemap(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    let path = config.public_join(&config.build.sitemap);
    let xml = render_sitemap(posts, config.base_url(), &config.build.public);

    write_output(&path, &xml)?;
    log!("sitemap"; "wrote {}", path.display());
    Ok(())
}

fn write_robots(config: &SiteConfig) -> Result<()> {
    let path = config.public_join(&config.build.robots);
    let sitemap_url = url_path(&config.build.sitemap);

    write_output(&path, &render_robots(config.base_url(), &sitemap_url))?;
    log!("robots"; "wrote {}", path.display());
    Ok(())
}

// ============================================================================
// Filesystem helpers
// ============================================================================

/// Site URL path of a file relative to the public directory.
fn url_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Read a file, treating "not found" as `None`.
fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Write `new` only when it differs from `original`, keeping mtimes stable.
fn write_if_changed(path: &Path, original: &str, new: &str) -> Result<bool> {
    if original == new {
        return Ok(false);
    }
    fs::write(path, new).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

/// Write a generated artifact, creating parent directories.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
