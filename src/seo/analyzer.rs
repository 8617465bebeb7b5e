use super::text_metrics::{
    count_words, keyword_occurrences, keyword_pattern, readability_score,
};
use crate::content::ArticleDraft;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeoError {
    /// The keyword could not be compiled into a matcher (e.g. size limit)
    #[error("Cannot match keyword '{keyword}': {source}")]
    KeywordPattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

/// Bounds that drive suggestion generation.
///
/// Every field is optional in configuration files; missing keys use the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoThresholds {
    pub min_word_count: usize,
    pub max_word_count: usize,
    pub min_keyword_density: f64,
    pub max_keyword_density: f64,
}

impl Default for SeoThresholds {
    fn default() -> Self {
        Self {
            min_word_count: 300,
            max_word_count: 2500,
            min_keyword_density: 0.01,
            max_keyword_density: 0.03,
        }
    }
}

/// Result of one analysis run. Built fresh every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMetrics {
    pub word_count: usize,
    /// Keyword (as given) → occurrences / word_count, capped to `[0, 1]`
    pub keyword_density: BTreeMap<String, f64>,
    /// Flesch Reading Ease in `[0, 100]`
    pub readability_score: f64,
    pub suggestions: Vec<String>,
}

/// Scores article text against [`SeoThresholds`].
#[derive(Debug, Clone, Default)]
pub struct SeoAnalyzer {
    thresholds: SeoThresholds,
}

impl SeoAnalyzer {
    pub fn new(thresholds: SeoThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SeoThresholds {
        &self.thresholds
    }

    /// Analyzes `draft.content` for length, keyword density and readability.
    ///
    /// Every keyword gets a density entry, `0.0` when it never occurs.
    /// Suggestions come in a fixed order: at most one word-count remark,
    /// then one density remark per out-of-range keyword in input order.
    /// Duplicate keywords are reported once.
    ///
    /// # Errors
    ///
    /// [`SeoError::KeywordPattern`] if a keyword cannot be turned into a
    /// matcher. No partial metrics are returned.
    pub fn analyze_content(
        &self,
        draft: &ArticleDraft,
        keywords: &[String],
    ) -> Result<SeoMetrics, SeoError> {
        let text = draft.content.as_str();
        let word_count = count_words(text);
        let lowered = text.to_lowercase();

        let mut keyword_density = BTreeMap::new();
        let mut ordered = Vec::with_capacity(keywords.len());
        let mut seen = HashSet::new();

        for keyword in keywords {
            if !seen.insert(keyword.as_str()) {
                continue;
            }
            let pattern =
                keyword_pattern(keyword).map_err(|source| SeoError::KeywordPattern {
                    keyword: keyword.clone(),
                    source,
                })?;
            let count = keyword_occurrences(pattern.as_ref(), &lowered);
            // Regex word boundaries split "a-a-a" further than whitespace does
            let density = if word_count > 0 {
                (count as f64 / word_count as f64).min(1.0)
            } else {
                0.0
            };
            keyword_density.insert(keyword.clone(), density);
            ordered.push((keyword.as_str(), density));
        }

        let suggestions = self.suggestions(word_count, &ordered);
        let readability_score = readability_score(text);

        tracing::debug!(
            word_count = word_count,
            keywords = keyword_density.len(),
            readability = readability_score,
            suggestions = suggestions.len(),
            "Analyzed content"
        );

        Ok(SeoMetrics {
            word_count,
            keyword_density,
            readability_score,
            suggestions,
        })
    }

    fn suggestions(&self, word_count: usize, densities: &[(&str, f64)]) -> Vec<String> {
        let t = &self.thresholds;
        let mut suggestions = Vec::new();

        if word_count < t.min_word_count {
            suggestions.push(format!(
                "Content length ({} words) is below recommended minimum of {} words",
                word_count, t.min_word_count
            ));
        } else if word_count > t.max_word_count {
            suggestions.push(format!(
                "Content length ({} words) exceeds recommended maximum of {} words",
                word_count, t.max_word_count
            ));
        }

        for (keyword, density) in densities {
            if *density < t.min_keyword_density {
                suggestions.push(format!(
                    "Keyword '{}' density is too low ({:.2}%)",
                    keyword,
                    density * 100.0
                ));
            } else if *density > t.max_keyword_density {
                suggestions.push(format!(
                    "Keyword '{}' density is too high ({:.2}%)",
                    keyword,
                    density * 100.0
                ));
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(content: &str) -> ArticleDraft {
        ArticleDraft {
            content: content.to_string(),
            ..ArticleDraft::default()
        }
    }

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    /// `n` filler words followed by `hits` occurrences of "rust".
    fn padded(n: usize, hits: usize) -> String {
        let mut words = vec!["lorem"; n];
        words.extend(std::iter::repeat("rust").take(hits));
        words.join(" ")
    }

    #[test]
    fn test_punctuation_joined_keyword_density_capped() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft("a-a-a"), &keywords(&["a", "a a"]))
            .unwrap();

        assert_eq!(metrics.word_count, 1);
        assert_eq!(metrics.keyword_density["a"], 1.0);
        assert_eq!(metrics.keyword_density["a a"], 0.0);
        assert!(metrics
            .suggestions
            .contains(&"Keyword 'a' density is too high (100.00%)".to_string()));
    }

    #[test]
    fn test_default_thresholds() {
        let t = SeoThresholds::default();
        assert_eq!(t.min_word_count, 300);
        assert_eq!(t.max_word_count, 2500);
        assert_eq!(t.min_keyword_density, 0.01);
        assert_eq!(t.max_keyword_density, 0.03);
    }

    #[test]
    fn test_short_text_full_report() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft("category cat Cat CAT. catalog"), &keywords(&["cat", "dog"]))
            .unwrap();

        assert_eq!(metrics.word_count, 5);
        assert_eq!(metrics.keyword_density["cat"], 0.6);
        assert_eq!(metrics.keyword_density["dog"], 0.0);
        assert!((metrics.readability_score - 35.0975).abs() < 1e-9);
        assert_eq!(
            metrics.suggestions,
            vec![
                "Content length (5 words) is below recommended minimum of 300 words".to_string(),
                "Keyword 'cat' density is too high (60.00%)".to_string(),
                "Keyword 'dog' density is too low (0.00%)".to_string(),
            ]
        );
    }

    #[test]
    fn test_word_boundary_density() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft("category cat"), &keywords(&["cat"]))
            .unwrap();
        assert_eq!(metrics.keyword_density["cat"], 0.5);
    }

    #[test]
    fn test_every_keyword_has_an_entry() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft("nothing relevant here"), &keywords(&["seo", "rss", "rust"]))
            .unwrap();
        assert_eq!(metrics.keyword_density.len(), 3);
        assert!(metrics.keyword_density.values().all(|d| *d == 0.0));
    }

    #[test]
    fn test_empty_content() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft(""), &keywords(&["seo"]))
            .unwrap();
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.keyword_density["seo"], 0.0);
        assert_eq!(metrics.readability_score, 0.0);
        assert_eq!(metrics.suggestions.len(), 2);
    }

    #[test]
    fn test_word_count_in_range_no_length_suggestion() {
        let analyzer = SeoAnalyzer::default();
        // 2% density: 294 filler + 6 hits = 300 words
        let metrics = analyzer
            .analyze_content(&draft(&padded(294, 6)), &keywords(&["rust"]))
            .unwrap();
        assert_eq!(metrics.word_count, 300);
        assert_eq!(metrics.keyword_density["rust"], 0.02);
        assert!(metrics.suggestions.is_empty());
    }

    #[test]
    fn test_too_long_is_exclusive_of_too_short() {
        let analyzer = SeoAnalyzer::new(SeoThresholds {
            min_word_count: 10,
            max_word_count: 5,
            ..SeoThresholds::default()
        });
        // 3 words: below the minimum, so the maximum check is skipped
        let metrics = analyzer
            .analyze_content(&draft("one two three"), &[])
            .unwrap();
        assert_eq!(metrics.suggestions.len(), 1);
        assert!(metrics.suggestions[0].contains("below recommended minimum"));
    }

    #[test]
    fn test_too_long_content() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft(&padded(2501, 0)), &[])
            .unwrap();
        assert_eq!(
            metrics.suggestions,
            vec!["Content length (2501 words) exceeds recommended maximum of 2500 words".to_string()]
        );
    }

    #[test]
    fn test_suggestions_follow_keyword_order() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft(&padded(300, 0)), &keywords(&["zeta", "alpha"]))
            .unwrap();
        assert_eq!(metrics.suggestions.len(), 2);
        assert!(metrics.suggestions[0].contains("'zeta'"));
        assert!(metrics.suggestions[1].contains("'alpha'"));
    }

    #[test]
    fn test_duplicate_keywords_reported_once() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft(&padded(300, 0)), &keywords(&["rust", "rust"]))
            .unwrap();
        assert_eq!(metrics.keyword_density.len(), 1);
        assert_eq!(metrics.suggestions.len(), 1);
    }

    #[test]
    fn test_keyword_key_keeps_original_case() {
        let analyzer = SeoAnalyzer::default();
        let metrics = analyzer
            .analyze_content(&draft("Rust rust RUST"), &keywords(&["Rust"]))
            .unwrap();
        assert_eq!(metrics.keyword_density["Rust"], 1.0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let analyzer = SeoAnalyzer::default();
        let d = draft("This is a test. It works well!");
        let kws = keywords(&["test", "well"]);
        let first = analyzer.analyze_content(&d, &kws).unwrap();
        let second = analyzer.analyze_content(&d, &kws).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
