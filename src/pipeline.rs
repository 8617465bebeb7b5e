//! Linear, best-effort composition: feed entry → draft → SEO metrics → image.
//!
//! Each step runs once. Any producer failure aborts the run and is returned
//! as-is; no partially generated post is handed back.

use crate::content::{ArticleDraft, ContentProducer, ProducerError};
use crate::feed::FeedEntry;
use crate::seo::{SeoAnalyzer, SeoError, SeoMetrics};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Producer(#[from] ProducerError),
    #[error(transparent)]
    Seo(#[from] SeoError),
}

/// Everything produced for one source entry.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPost {
    pub source_link: String,
    pub draft: ArticleDraft,
    pub metrics: SeoMetrics,
    pub image_prompt: Option<String>,
    pub image_url: Option<String>,
}

/// Generates, scores and (optionally) illustrates a post for `entry`.
///
/// The draft is scored against the caller's `keywords`, not the keywords
/// the model claims to have used.
pub async fn generate_post(
    producer: &dyn ContentProducer,
    analyzer: &SeoAnalyzer,
    entry: &FeedEntry,
    keywords: &[String],
    with_image: bool,
) -> Result<GeneratedPost, PipelineError> {
    tracing::info!(title = %entry.title, source = %entry.source, "Generating post");

    let draft = producer.generate_article(entry, keywords).await?;
    let metrics = analyzer.analyze_content(&draft, keywords)?;

    let (image_prompt, image_url) = if with_image {
        let prompt = producer.generate_image_prompt(&draft).await?;
        let url = producer.generate_image(&prompt).await?;
        (Some(prompt), url)
    } else {
        (None, None)
    };

    tracing::info!(
        title = %draft.title,
        words = metrics.word_count,
        readability = metrics.readability_score,
        has_image = image_url.is_some(),
        "Post generated"
    );

    Ok(GeneratedPost {
        source_link: entry.link.clone(),
        draft,
        metrics,
        image_prompt,
        image_url,
    })
}
