//! Site-wide artifacts derived from the post collection.
//!
//! - **Feed**: RSS 2.0 channel for blog readers (`blog/feed.xml`)
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//! - **Robots**: Crawler policy pointing at the sitemap (`robots.txt`)
//!
//! Generators only render; the build command owns writing.

pub mod feed;
pub mod robots;
pub mod sitemap;

pub use feed::render_feed;
pub use robots::render_robots;
pub use sitemap::render_sitemap;
