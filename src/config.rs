//! Configuration file parser for ~/.config/seoforge/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde, though we log a warning when
//! the file contains potential typos.
use crate::content::OpenAiSettings;
use crate::feed::{FeedError, FeedSource};
use crate::seo::SeoThresholds;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Invalid feed '{name}' in config file: {source}")]
    InvalidFeed {
        name: String,
        #[source]
        source: FeedError,
    },
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thresholds for SEO suggestions (`[seo]`).
    pub seo: SeoThresholds,

    /// Generative service connection (`[openai]`).
    pub openai: OpenAiSettings,

    /// Named feed subscriptions (`[feeds]`), name → URL.
    pub feeds: BTreeMap<String, String>,

    /// Keywords used when none are given on the command line.
    pub default_keywords: Vec<String>,
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 4] = ["seo", "openai", "feeds", "default_keywords"];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(
            path = %path.display(),
            feeds = config.feeds.len(),
            model = %config.openai.model,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Builds a [`FeedSource`] pre-populated with the `[feeds]` table.
    ///
    /// Entries go through [`FeedSource::add_feed`], so a bad URL is reported
    /// with the offending name.
    pub fn feed_source(&self, client: reqwest::Client) -> Result<FeedSource, ConfigError> {
        let mut source = FeedSource::new(client);
        for (name, url) in &self.feeds {
            source
                .add_feed(name, url)
                .map_err(|e| ConfigError::InvalidFeed {
                    name: name.clone(),
                    source: e,
                })?;
        }
        Ok(source)
    }
}

// ============================================================================
// Tests
// ============================================================================
