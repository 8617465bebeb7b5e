use std::borrow::Cow;

/// Truncates a string to at most `max_chars` characters.
///
/// Cuts on `char` boundaries, so multi-byte text never panics. No ellipsis
/// is appended: the result is fed to prompts, not rendered.
///
/// Returns `Cow::Borrowed(s)` when the string already fits.
///
/// # Examples
///
/// ```
/// use seoforge::util::truncate_chars;
///
/// assert_eq!(truncate_chars("Hello World", 5), "Hello");
/// assert_eq!(truncate_chars("Short", 10), "Short");
/// assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(s[..byte_idx].to_string()),
        None => Cow::Borrowed(s),
    }
}

/// Splits a comma-separated keyword list.
///
/// Each keyword is trimmed; blank items are dropped. Order is preserved.
///
/// ```
/// use seoforge::util::split_keywords;
///
/// assert_eq!(split_keywords("rust, async ,, tokio"), vec!["rust", "async", "tokio"]);
/// ```
pub fn split_keywords(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("Hello World", 5), "Hello");
        assert_eq!(truncate_chars("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_returns_borrowed_when_fits() {
        let result = truncate_chars("fits", 200);
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate_chars("Test", 0), "");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_truncate_multibyte_no_panic() {
        // 4-byte emoji and 3-byte CJK must be cut on char boundaries
        assert_eq!(truncate_chars("ab🎉cd", 3), "ab🎉");
        assert_eq!(truncate_chars("日本語テキスト", 4), "日本語テ");
    }

    #[test]
    fn test_split_keywords_trims_and_drops_blanks() {
        assert_eq!(
            split_keywords(" seo , , content marketing,rss "),
            vec!["seo", "content marketing", "rss"]
        );
    }

    #[test]
    fn test_split_keywords_empty() {
        assert!(split_keywords("").is_empty());
        assert!(split_keywords(" , ,").is_empty());
    }
}
