use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_REGEX: Regex = Regex::new(r"(?i)\bhttps?://\S+").unwrap();
    static ref HASHTAG_REGEX: Regex = Regex::new(r"#(\w+)").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Post text in two forms: the original for extraction, the folded one for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub original: String,
    pub normalized: String,
}

impl NormalizedText {
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn normalize(text: &str) -> NormalizedText {
        NormalizedText {
            original: text.to_string(),
            normalized: Self::normalize_text_only(text),
        }
    }

    pub fn normalize_text_only(text: &str) -> String {
        let lowered = text.to_lowercase();
        // Links carry tracking noise like "app" or "dashboard" in their paths
        let without_urls = Self::strip_urls(&lowered);
        let without_hashtags = HASHTAG_REGEX.replace_all(&without_urls, "$1");
        WHITESPACE_REGEX
            .replace_all(&without_hashtags, " ")
            .trim()
            .to_string()
    }

    /// Blank out links, leaving the rest of the text and its casing untouched.
    pub fn strip_urls(text: &str) -> String {
        URL_REGEX.replace_all(text, " ").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_fold_and_whitespace_collapse() {
        assert_eq!(
            TextNormalizer::normalize_text_only("  Need   a\tWEBSITE\n\nbuilt  "),
            "need a website built"
        );
    }

    #[test]
    fn test_urls_removed() {
        assert_eq!(
            TextNormalizer::normalize_text_only(
                "See https://example.com/mobile-app/dashboard for details"
            ),
            "see for details"
        );
    }

    #[test]
    fn test_strip_urls_keeps_original_casing() {
        assert_eq!(
            TextNormalizer::strip_urls("Ping me: HTTPS://Example.com/API, Python please"),
            "Ping me:   Python please"
        );
        assert_eq!(TextNormalizer::strip_urls("no links here"), "no links here");
    }

    #[test]
    fn test_hashtags_keep_their_word() {
        assert_eq!(
            TextNormalizer::normalize_text_only("Hiring! #DataVisualization #ETL"),
            "hiring! datavisualization etl"
        );
    }

    #[test]
    fn test_original_is_preserved() {
        let text = "Budget $5,000 for a Dashboard";
        let normalized = TextNormalizer::normalize(text);
        assert_eq!(normalized.original, text);
        assert_eq!(normalized.normalized, "budget $5,000 for a dashboard");
    }

    #[test]
    fn test_empty_and_unicode_input() {
        assert!(TextNormalizer::normalize("").is_blank());
        assert!(TextNormalizer::normalize(" \n\t ").is_blank());
        assert_eq!(
            TextNormalizer::normalize_text_only("Ünïcödé  ДАННЫЕ 数据"),
            "ünïcödé данные 数据"
        );
    }
}
