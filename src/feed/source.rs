use super::fetcher::fetch_feed;
use super::parser::{parse_entries, FeedEntry};
use super::FeedError;
use crate::util::{is_valid_url, validate_url};
use std::collections::BTreeMap;

const INVALID_URL_MESSAGE: &str = "Invalid URL format. Please provide a valid RSS feed URL.";

/// Fetches feeds and owns a registry of named subscriptions.
///
/// The registry lives exactly as long as the value; there is no persistence
/// and no internal locking. Share it across tasks behind your own mutex if
/// you need to.
#[derive(Debug, Clone, Default)]
pub struct FeedSource {
    client: reqwest::Client,
    feeds: BTreeMap<String, String>,
}

impl FeedSource {
    /// Creates an empty registry that fetches with `client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            feeds: BTreeMap::new(),
        }
    }

    /// See [`crate::util::is_valid_url`].
    pub fn is_valid_url(&self, url: &str) -> bool {
        is_valid_url(url)
    }

    /// Fetches `url` and returns one [`FeedEntry`] per item.
    ///
    /// All-or-nothing: either every entry is returned or an error is.
    ///
    /// # Errors
    ///
    /// - [`FeedError::InvalidInput`] - `url` has no scheme or host (no request is made)
    /// - [`FeedError::Network`] / [`FeedError::HttpStatus`] /
    ///   [`FeedError::ResponseTooLarge`] - retrieval failed
    /// - [`FeedError::Parse`] - document is not RSS/Atom
    /// - [`FeedError::NoEntries`] - feed has zero items
    pub async fn parse_feed(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
        let parsed_url =
            validate_url(url).map_err(|_| FeedError::InvalidInput(INVALID_URL_MESSAGE.to_string()))?;

        let bytes = fetch_feed(&self.client, &parsed_url).await?;
        let entries = parse_entries(&bytes)?;

        tracing::info!(url = %parsed_url, entries = entries.len(), "Feed parsed");
        Ok(entries)
    }

    /// Registers `url` under `name`, silently replacing any previous URL.
    ///
    /// # Errors
    ///
    /// [`FeedError::InvalidInput`] if either argument is empty or `url` is
    /// not a valid URL.
    pub fn add_feed(&mut self, name: &str, url: &str) -> Result<(), FeedError> {
        if name.is_empty() || url.is_empty() {
            return Err(FeedError::InvalidInput(
                "Both feed name and URL are required".to_string(),
            ));
        }

        if !is_valid_url(url) {
            return Err(FeedError::InvalidInput(INVALID_URL_MESSAGE.to_string()));
        }

        if let Some(previous) = self.feeds.insert(name.to_string(), url.to_string()) {
            tracing::debug!(name = %name, previous = %previous, url = %url, "Replaced feed");
        } else {
            tracing::debug!(name = %name, url = %url, "Added feed");
        }
        Ok(())
    }

    /// Removes the feed registered under `name`.
    ///
    /// # Errors
    ///
    /// [`FeedError::NotFound`] if no such feed is registered.
    pub fn remove_feed(&mut self, name: &str) -> Result<(), FeedError> {
        match self.feeds.remove(name) {
            Some(_) => {
                tracing::debug!(name = %name, "Removed feed");
                Ok(())
            }
            None => Err(FeedError::NotFound(name.to_string())),
        }
    }

    /// Returns a snapshot of the registry; later mutations are not reflected.
    pub fn list_feeds(&self) -> BTreeMap<String, String> {
        self.feeds.clone()
    }

    /// Maps a registered feed name to its URL; anything else is returned as-is.
    pub fn resolve<'a>(&'a self, name_or_url: &'a str) -> &'a str {
        self.feeds
            .get(name_or_url)
            .map(String::as_str)
            .unwrap_or(name_or_url)
    }
}
