//! `robots.txt` generation.

use crate::utils::url::to_absolute;

/// Allow every crawler everywhere and advertise the sitemap at
/// `sitemap_path` (site-relative).
pub fn render_robots(base_url: &str, sitemap_path: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}\n",
        to_absolute(base_url, sitemap_path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_robots() {
        assert_eq!(
            render_robots("https://example.com/", "/sitemap.xml"),
            "User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml\n"
        );
    }

    #[test]
    fn test_render_robots_with_base_path() {
        assert!(
            render_robots("https://example.com/sub", "sitemap.xml")
                .ends_with("Sitemap: https://example.com/sub/sitemap.xml\n")
        );
    }
}
