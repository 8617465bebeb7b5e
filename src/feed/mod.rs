//! Feed ingestion: validating, fetching and normalizing RSS/Atom sources.
//!
//! - [`parser`] - Converts RSS/Atom bytes into [`FeedEntry`] values using `feed-rs`
//! - [`fetcher`] - Single-attempt HTTP retrieval with a body size cap
//! - [`source`] - [`FeedSource`]: the named-feed registry plus `parse_feed`
//!
//! # Example
//!
//! ```ignore
//! use seoforge::feed::FeedSource;
//!
//! let mut source = FeedSource::new(reqwest::Client::new());
//! source.add_feed("rust", "https://blog.rust-lang.org/feed.xml")?;
//! let entries = source.parse_feed(source.resolve("rust")).await?;
//! ```

mod error;
mod fetcher;
mod parser;
mod source;

pub use error::FeedError;
pub use fetcher::{fetch_feed, MAX_FEED_SIZE};
pub use parser::{parse_entries, FeedEntry, UNKNOWN_SOURCE};
pub use source::FeedSource;
