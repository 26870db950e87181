use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default search-text preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC keeps Hebrew points and Greek accents comparable across sources
        let text: String = text.nfc().collect();

        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

pub struct QueryPreprocessor;
impl Preprocessor for QueryPreprocessor {}
