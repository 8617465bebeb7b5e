use super::ArticleDraft;
use crate::feed::FeedEntry;
use async_trait::async_trait;
use thiserror::Error;

/// Failures at the generative-service boundary.
///
/// Every variant names the stage that failed (`"content"`, `"image prompt"`,
/// `"image"`). Nothing is retried.
#[derive(Debug, Error)]
pub enum ProducerError {
    /// No API key in the environment or configuration
    #[error("No API key configured (set OPENAI_API_KEY or [openai].api_key)")]
    MissingApiKey,
    /// Base URL does not parse
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// Base URL is plain HTTP on a non-local host
    #[error("Insecure base URL: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl,
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Error generating {stage}: {source}")]
    Network {
        stage: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// Service answered with a non-2xx status
    #[error("Error generating {stage}: HTTP {status}: {body}")]
    HttpStatus {
        stage: &'static str,
        status: u16,
        body: String,
    },
    /// Service answered, but not with what was asked for
    #[error("Error generating {stage}: {reason}")]
    MalformedResponse { stage: &'static str, reason: String },
}

/// Generative text/image collaborator.
///
/// Implementations issue one request per call and parse the answer; the
/// pipeline never retries. Tests substitute deterministic stubs.
#[async_trait]
pub trait ContentProducer: Send + Sync {
    /// Rewrites `source` into a new article featuring `keywords`.
    async fn generate_article(
        &self,
        source: &FeedEntry,
        keywords: &[String],
    ) -> Result<ArticleDraft, ProducerError>;

    /// Describes a header image for `draft`.
    async fn generate_image_prompt(&self, draft: &ArticleDraft) -> Result<String, ProducerError>;

    /// Renders `prompt`. `Ok(None)` means the service produced no image.
    async fn generate_image(&self, prompt: &str) -> Result<Option<String>, ProducerError>;
}
