//! Absolute URL construction against the configured site base.

/// Join a site-relative path onto the base URL.
///
/// The base loses its trailing slashes and the path its leading slashes, so
/// `("https://example.com/", "/blog/")` and `("https://example.com", "blog/")`
/// both give `https://example.com/blog/`. An empty path returns the base.
pub fn to_absolute(base_url: &str, url_path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if url_path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, url_path.trim_start_matches('/'))
}

/// Check that a base URL is an absolute http(s) URL with a host.
///
/// Returns a human-readable reason on failure.
pub fn check_base_url(base_url: &str) -> Result<(), String> {
    let parsed = url::Url::parse(base_url).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".to_string());
    }
    Ok(())
}
