//! Splits verse text with inline Strong's markup (`word[H1234][H5678]`) into renderable runs.
//!
//! Alternatives are tried in a fixed order: a word with trailing reference groups, a bare
//! word, then whitespace. A word followed by something that only looks like a group
//! (`word[HX]`) therefore stays one plain word, brackets included.

use std::sync::LazyLock;

use regex::Regex;

static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S+?)((?:\[[HG][0-9]+\])+)|(\S+)|(\s+)").expect("segment pattern compiles")
});

static CODE_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([HG][0-9]+)\]").expect("code group pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseSegment {
    Whitespace(String),
    PlainWord(String),
    /// `codes` is non-empty and in source order
    AnnotatedWord { text: String, codes: Vec<String> },
}

impl VerseSegment {
    pub fn text(&self) -> &str {
        match self {
            VerseSegment::Whitespace(text) | VerseSegment::PlainWord(text) => text,
            VerseSegment::AnnotatedWord { text, .. } => text,
        }
    }

    pub fn codes(&self) -> Option<&[String]> {
        match self {
            VerseSegment::AnnotatedWord { codes, .. } => Some(codes),
            _ => None,
        }
    }

    /// Code looked up when the word is activated
    pub fn primary_code(&self) -> Option<&str> {
        self.codes()
            .and_then(|codes| codes.first())
            .map(String::as_str)
    }

    pub fn is_annotated(&self) -> bool {
        matches!(self, VerseSegment::AnnotatedWord { .. })
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, VerseSegment::Whitespace(_))
    }
}

/// Tokenize one verse. Codes are collected as written; nothing is checked against a dictionary.
pub fn tokenize(verse: &str) -> Vec<VerseSegment> {
    SEGMENT_RE
        .captures_iter(verse)
        .filter_map(|caps| {
            if let (Some(word), Some(groups)) = (caps.get(1), caps.get(2)) {
                let codes = CODE_GROUP_RE
                    .captures_iter(groups.as_str())
                    .filter_map(|g| g.get(1))
                    .map(|m| m.as_str().to_string())
                    .collect();
                Some(VerseSegment::AnnotatedWord {
                    text: word.as_str().to_string(),
                    codes,
                })
            } else if let Some(word) = caps.get(3) {
                Some(VerseSegment::PlainWord(word.as_str().to_string()))
            } else {
                caps.get(4)
                    .map(|ws| VerseSegment::Whitespace(ws.as_str().to_string()))
            }
        })
        .collect()
}

/// Verse text with attached reference groups removed
pub fn strip_annotations(verse: &str) -> String {
    tokenize(verse).iter().map(VerseSegment::text).collect()
}
