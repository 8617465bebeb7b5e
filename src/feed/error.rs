use thiserror::Error;

/// Errors raised by [`FeedSource`](super::FeedSource) operations.
///
/// Variants fall into three groups:
///
/// - **Usage errors** caught before any I/O: [`InvalidInput`](Self::InvalidInput)
/// - **Registry misses**: [`NotFound`](Self::NotFound)
/// - **Feed errors**, where retrieval or the document itself is unusable:
///   everything else
///
/// None of these are retried; the message carries the original cause.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Missing or malformed argument (empty name, invalid URL)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Registry lookup miss
    #[error("Feed '{0}' not found")]
    NotFound(String),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response body exceeded the size limit
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// Document could not be parsed as RSS or Atom
    #[error("Feed parsing error: {0}")]
    Parse(String),
    /// Document parsed but contained no entries
    #[error("No entries found in the feed. Please verify this is a valid RSS feed.")]
    NoEntries,
}

impl FeedError {
    /// Returns true if the error was raised before any I/O took place.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FeedError::InvalidInput(_))
    }
}
