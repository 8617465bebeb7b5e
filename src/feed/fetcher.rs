use super::FeedError;
use futures::StreamExt;
use url::Url;

/// Upper bound on a feed document body.
pub const MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Fetches a feed document over HTTP(S).
///
/// Single attempt, no retry: 5xx and 4xx responses alike surface as
/// [`FeedError::HttpStatus`]. Timeouts are whatever the supplied `client`
/// was built with.
///
/// # Errors
///
/// - [`FeedError::Network`] - Connection or TLS errors
/// - [`FeedError::HttpStatus`] - Non-2xx HTTP response
/// - [`FeedError::ResponseTooLarge`] - Body exceeded [`MAX_FEED_SIZE`]
pub async fn fetch_feed(client: &reqwest::Client, url: &Url) -> Result<Vec<u8>, FeedError> {
    tracing::debug!(url = %url, "Fetching feed");

    let response = client.get(url.as_str()).send().await?;

    if !response.status().is_success() {
        tracing::warn!(url = %url, status = %response.status(), "Feed request failed");
        return Err(FeedError::HttpStatus(response.status().as_u16()));
    }

    read_limited_bytes(response, MAX_FEED_SIZE).await
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FeedError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FeedError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FeedError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FeedError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
