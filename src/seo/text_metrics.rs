//! Heuristic text statistics behind the readability score.
//!
//! These are deliberately approximate: suggestion thresholds are calibrated
//! against exactly these counting rules, so they must not be "improved"
//! independently of the thresholds.

use regex::Regex;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of segments produced by splitting on runs of `.`, `!` or `?`.
///
/// Splitting always yields one more segment than there are terminator runs,
/// empty segments included: `"Hi. Bye."` is 3 and `""` is 1.
pub fn count_sentences(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;

    for c in text.chars() {
        let is_terminator = SENTENCE_TERMINATORS.contains(&c);
        if is_terminator && !in_run {
            runs += 1;
        }
        in_run = is_terminator;
    }

    runs + 1
}

/// Counts maximal runs of vowels (`aeiouy`, case-insensitive) in `text`.
///
/// Spaces and punctuation break runs just like consonants do.
pub fn count_syllables(text: &str) -> usize {
    let mut count = 0;
    let mut on_vowel = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !on_vowel {
            count += 1;
        }
        on_vowel = is_vowel;
    }

    count
}

/// Builds the whole-word, case-insensitive matcher for `keyword`.
///
/// Returns `Ok(None)` for a blank keyword, which never matches.
pub fn keyword_pattern(keyword: &str) -> Result<Option<Regex>, regex::Error> {
    if keyword.trim().is_empty() {
        return Ok(None);
    }
    let pattern = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
    Regex::new(&pattern).map(Some)
}

/// Counts non-overlapping whole-word occurrences of `pattern` in the
/// already lower-cased `text`.
pub fn keyword_occurrences(pattern: Option<&Regex>, lowered_text: &str) -> usize {
    pattern.map_or(0, |re| re.find_iter(lowered_text).count())
}

/// Flesch Reading Ease clamped to `[0, 100]`.
///
/// `0.0` when there are no words or no sentences.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if sentences == 0 || words == 0 {
        return 0.0;
    }

    let words = words as f64;
    let score =
        206.835 - 1.015 * (words / sentences as f64) - 84.6 * (syllables as f64 / words);
    score.clamp(0.0, 100.0)
}

/// Readability of `text`, combining the counters above.
pub fn readability_score(text: &str) -> f64 {
    flesch_reading_ease(
        count_words(text),
        count_sentences(text),
        count_syllables(text),
    )
}
