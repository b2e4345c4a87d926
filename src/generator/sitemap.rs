//! Sitemap generation.
//!
//! Lists the fixed set of top-level static pages plus every post.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    post::Post,
    utils::{date::DateTimeUtc, url::to_absolute},
};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Static page registry
// ============================================================================

/// A top-level page that exists outside the post collection.
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
    pub url_path: &'static str,
    /// File relative to the public directory, source of `<lastmod>`.
    pub file: &'static str,
    pub priority: f32,
    /// Non-indexable pages are kept out of the sitemap.
    pub indexable: bool,
}

impl StaticPage {
    const fn new(url_path: &'static str, file: &'static str, priority: f32) -> Self {
        Self {
            url_path,
            file,
            priority,
            indexable: true,
        }
    }

    const fn noindex(self) -> Self {
        Self {
            indexable: false,
            ..self
        }
    }
}

pub const STATIC_PAGES: &[StaticPage] = &[
    StaticPage::new("/index.html", "index.html", 1.0),
    StaticPage::new("/products.html", "products.html", 0.9),
    StaticPage::new("/blog/", "blog/index.html", 0.8),
    StaticPage::new("/support.html", "support.html", 0.6),
    StaticPage::new("/terms.html", "terms.html", 0.3),
    StaticPage::new("/privacy.html", "privacy.html", 0.3),
    StaticPage::new("/refund.html", "refund.html", 0.3),
    StaticPage::new("/tokusho", "tokusho/index.html", 0.3),
    StaticPage::new("/thanks.html", "thanks.html", 0.1).noindex(),
];

const POST_PRIORITY: f32 = 0.6;

// ============================================================================
// Sitemap
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    changefreq: ChangeFreq,
    priority: f32,
}

/// Render `sitemap.xml` for the static pages under `public` and `posts`.
pub fn render_sitemap(posts: &[Post], base_url: &str, public: &Path) -> String {
    Sitemap::build(posts, base_url, public).into_xml()
}

impl Sitemap {
    fn build(posts: &[Post], base_url: &str, public: &Path) -> Self {
        let pages = STATIC_PAGES
            .iter()
            .filter(|page| page.indexable)
            .map(|page| UrlEntry {
                loc: to_absolute(base_url, page.url_path),
                lastmod: file_lastmod(&public.join(page.file)),
                changefreq: ChangeFreq::Weekly,
                priority: page.priority,
            });

        let posts = posts.iter().map(|post| UrlEntry {
            loc: to_absolute(base_url, &post.url),
            lastmod: post.parsed_date().map(DateTimeUtc::to_date_string),
            changefreq: ChangeFreq::Monthly,
            priority: POST_PRIORITY,
        });

        Self {
            urls: pages.chain(posts).collect(),
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n");
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Modification date (UTC) of a file, if it exists.
fn file_lastmod(path: &Path) -> Option<String> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTimeUtc::from_system_time(modified).to_date_string())
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
