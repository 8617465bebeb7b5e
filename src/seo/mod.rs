//! SEO scoring of generated articles.
//!
//! [`SeoAnalyzer::analyze_content`] reports word count, per-keyword density
//! and a Flesch Reading Ease score, plus human-readable suggestions when the
//! text falls outside the configured [`SeoThresholds`].

mod analyzer;
pub mod text_metrics;

pub use analyzer::{SeoAnalyzer, SeoError, SeoMetrics, SeoThresholds};
