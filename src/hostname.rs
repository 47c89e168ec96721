/// Hostname extraction for the active tab
use url::Url;

/// Browser-internal pages never get a label
const SKIPPED_SCHEMES: &[&str] = &["chrome", "about", "moz-extension", "chrome-extension"];

/// Extract the hostname from a tab URL
///
/// Returns an empty string for unparseable URLs, URLs without a host
/// (`file:///tmp/x`), and browser-internal pages.
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - http://localhost:3000 → localhost
/// - about:blank → ""
pub fn hostname_from_url(url: &str) -> String {
    let parsed = match Url::parse(url.trim()) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("Invalid tab URL {:?}: {}", url, e);
            return String::new();
        }
    };

    if SKIPPED_SCHEMES.contains(&parsed.scheme()) {
        return String::new();
    }

    parsed.host_str().unwrap_or_default().to_string()
}
