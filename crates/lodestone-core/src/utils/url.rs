//! Lenient URL parsing for redirect targets.

use url::Url;

/// Parses user-supplied text into an absolute URL, tolerating a missing
/// scheme by retrying with `http://` prefixed. Returns `None` for empty
/// input or text that still fails to parse with the scheme applied.
///
/// Bare hostnames normalize the way a browser address bar would, so
/// `google.com` parses as `http://google.com/`.
pub fn parse_url(input: &str) -> Option<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed)
        .or_else(|_| Url::parse(&format!("http://{trimmed}")))
        .ok()
}
