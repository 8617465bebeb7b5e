use thiserror::Error;
use url::Url;

/// Errors that can occur during URL validation.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL parsed but carries no network location.
    #[error("URL has no host: {0}")]
    MissingHost(String),
}

/// Validates a URL string for use as a feed source.
///
/// A URL is accepted when it parses and has both a scheme and a non-empty
/// host. Any scheme is allowed; the fetcher decides what it can retrieve.
///
/// # Errors
///
/// Returns [`UrlValidationError`] if:
/// - The URL cannot be parsed ([`UrlValidationError::InvalidUrl`])
/// - The URL has no host, e.g. `ftp://` or `mailto:` ([`UrlValidationError::MissingHost`])
///
/// # Examples
///
/// ```
/// use seoforge::util::validate_url;
///
/// let url = validate_url("https://example.com/feed.xml").unwrap();
/// assert_eq!(url.host_str(), Some("example.com"));
///
/// assert!(validate_url("not a url").is_err());
/// assert!(validate_url("mailto:editor@example.com").is_err());
/// ```
pub fn validate_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;

    match url.host_str() {
        Some(host) if !host.is_empty() && !url.scheme().is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost(url_str.to_owned())),
    }
}

/// Returns `true` iff `url_str` has both a scheme and a host.
///
/// Never panics; malformed input simply yields `false`.
pub fn is_valid_url(url_str: &str) -> bool {
    validate_url(url_str).is_ok()
}
