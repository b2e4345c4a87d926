//! Post discovery and ordering.

use super::{Post, extract_post};
use crate::debug;
use jwalk::{Parallelism, WalkDir};
use std::path::{Path, PathBuf};

/// Posts that parsed, plus one warning per file that did not.
#[derive(Debug, Default)]
pub struct Collected {
    /// Newest first; undated posts last.
    pub posts: Vec<Post>,
    pub warnings: Vec<String>,
}

/// Extract every post in `dir` and sort newest first.
///
/// The caller is responsible for checking that `dir` exists.
pub fn collect_posts(dir: &Path) -> Collected {
    let mut collected = Collected::default();

    for path in list_post_files(dir, &mut collected.warnings) {
        match extract_post(&path) {
            Ok(post) => {
                debug!("collect"; "{} -> {}", path.display(), post.url);
                collected.posts.push(post);
            }
            Err(e) => collected.warnings.push(e.to_string()),
        }
    }

    sort_by_date(&mut collected.posts);
    collected
}

/// Immediate `.html` children of `dir` in file name order, skipping
/// `_`-prefixed drafts and partials.
///
/// Symlinks count when their target is a regular file. Entries that cannot
/// be read are reported through `warnings`.
pub fn list_post_files(dir: &Path, warnings: &mut Vec<String>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort(true)
        .parallelism(Parallelism::Serial);

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warnings.push(format!("failed to list {}: {}", dir.display(), e));
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".html") || name.starts_with('_') {
            continue;
        }

        let file_type = entry.file_type();
        let path = entry.path();
        if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        }
    }

    files
}

/// Stable sort, newest first. Unknown dates sort as the minimum, so they
/// land after every dated post and keep their listing order among
/// themselves.
pub fn sort_by_date(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
}
