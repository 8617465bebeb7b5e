use super::FeedError;
use chrono::Local;
use feed_rs::parser;
use serde::{Deserialize, Serialize};

/// Source label used when a feed declares no title.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// One syndicated item, normalized from RSS or Atom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    /// RFC 3339 timestamp, or the fetch time when the feed gives none
    pub published: String,
    pub summary: String,
    /// Full content body, falling back to the summary
    pub content: String,
    /// Title of the parent feed
    pub source: String,
}

/// Parses an RSS/Atom document into normalized entries.
///
/// # Errors
///
/// - [`FeedError::Parse`] if the document is not a usable feed
/// - [`FeedError::NoEntries`] if the feed parsed but has no items
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let feed = parser::parse(bytes).map_err(|e| FeedError::Parse(e.to_string()))?;

    if feed.entries.is_empty() {
        return Err(FeedError::NoEntries);
    }

    let source = feed
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    let entries: Vec<FeedEntry> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();
            let published = entry
                .published
                .or(entry.updated)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
            let summary = entry.summary.map(|s| s.content).unwrap_or_default();
            // RSS <description> surfaces as the summary, so the chain is content → summary
            let content = entry
                .content
                .and_then(|c| c.body)
                .unwrap_or_else(|| summary.clone());
            let title = entry.title.map(|t| t.content).unwrap_or_default();

            FeedEntry {
                title,
                link,
                published,
                summary,
                content,
                source: source.clone(),
            }
        })
        .collect();

    tracing::debug!(source = %source, entries = entries.len(), "Parsed feed");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_FULL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Example Blog</title>
    <link>https://example.com</link>
    <description>Posts</description>
    <item>
      <title>First Post</title>
      <link>https://example.com/first</link>
      <description>Short teaser</description>
      <content:encoded><![CDATA[<p>The whole article body</p>]]></content:encoded>
      <pubDate>Mon, 06 Jan 2025 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Second Post</title>
      <link>https://example.com/second</link>
      <description>Only a description</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_content_prefers_full_body() {
        let entries = parse_entries(RSS_FULL.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.title, "First Post");
        assert_eq!(first.link, "https://example.com/first");
        assert_eq!(first.summary, "Short teaser");
        assert!(first.content.contains("The whole article body"));
        assert_eq!(first.source, "Example Blog");
        assert!(first.published.starts_with("2025-01-06T10:00:00"));
    }

    #[test]
    fn test_content_falls_back_to_description() {
        let entries = parse_entries(RSS_FULL.as_bytes()).unwrap();
        let second = &entries[1];
        assert_eq!(second.content, "Only a description");
        assert_eq!(second.summary, "Only a description");
    }

    #[test]
    fn test_missing_published_defaults_to_now() {
        let entries = parse_entries(RSS_FULL.as_bytes()).unwrap();
        // Local "YYYY-MM-DD HH:MM:SS"
        let published = &entries[1].published;
        assert_eq!(published.len(), 19);
        assert_eq!(&published[4..5], "-");
        assert_eq!(&published[10..11], " ");
    }

    #[test]
    fn test_missing_everything_yields_empty_strings() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><item><guid>abc</guid></item></channel></rss>"#;
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].link, "");
        assert_eq!(entries[0].summary, "");
        assert_eq!(entries[0].content, "");
        assert_eq!(entries[0].source, UNKNOWN_SOURCE);
    }

    #[test]
    fn test_atom_feed() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Source</title>
  <id>urn:uuid:feed</id>
  <updated>2024-12-01T08:00:00Z</updated>
  <entry>
    <title>Atom Entry</title>
    <id>urn:uuid:entry</id>
    <link href="https://example.org/atom-entry"/>
    <updated>2024-12-01T08:00:00Z</updated>
    <summary>Atom summary</summary>
  </entry>
</feed>"#;
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries[0].source, "Atom Source");
        assert_eq!(entries[0].link, "https://example.org/atom-entry");
        assert_eq!(entries[0].content, "Atom summary");
        assert!(entries[0].published.starts_with("2024-12-01T08:00:00"));
    }

    #[test]
    fn test_updated_preferred_over_now_when_published_missing() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Revisions</title>
  <id>urn:uuid:feed</id>
  <updated>2023-03-04T05:06:07Z</updated>
  <entry>
    <title>Edited</title>
    <id>urn:uuid:edited</id>
    <updated>2023-03-04T05:06:07Z</updated>
  </entry>
  <entry>
    <title>Both dates</title>
    <id>urn:uuid:both</id>
    <published>2022-01-01T00:00:00Z</published>
    <updated>2023-03-04T05:06:07Z</updated>
  </entry>
</feed>"#;
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries[0].published, "2023-03-04T05:06:07+00:00");
        assert_eq!(entries[1].published, "2022-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_empty_channel_is_an_error() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>Empty</title></channel></rss>"#;
        let result = parse_entries(xml.as_bytes());
        assert!(matches!(result, Err(FeedError::NoEntries)));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let result = parse_entries(b"<html><body>not a feed</body></html>");
        assert!(matches!(result, Err(FeedError::Parse(_))));

        let result = parse_entries(b"");
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }
}
