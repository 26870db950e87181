use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::language::{Language, StrongsCode};

/// Fetches the raw JSON text of a dictionary
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch the backing document for `language`
    async fn fetch(&self, language: Language) -> Result<String, LoadError>;

    /// Human readable location, used in logs
    fn describe(&self, language: Language) -> String;
}

/// One concordance record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrongsEntry {
    /// Original-script word form
    pub lemma: Option<String>,
    pub transliteration: Option<String>,
    pub pronunciation: Option<String>,
    /// Etymological note
    pub derivation: Option<String>,
    /// Canonical gloss
    pub strongs_definition: String,
    /// How the KJV renders the word
    pub kjv_translation_note: String,
}

// On-disk shape. Hebrew files use `xlit`, Greek files use `translit`.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    lemma: Option<String>,
    #[serde(default)]
    xlit: Option<String>,
    #[serde(default)]
    translit: Option<String>,
    #[serde(default)]
    pron: Option<String>,
    #[serde(default)]
    derivation: Option<String>,
    strongs_def: String,
    kjv_def: String,
}

impl From<RawEntry> for StrongsEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            lemma: raw.lemma,
            transliteration: raw.xlit.or(raw.translit),
            pronunciation: raw.pron,
            derivation: raw.derivation,
            strongs_definition: raw.strongs_def,
            kjv_translation_note: raw.kjv_def,
        }
    }
}

/// Immutable code → entry table for a single language
#[derive(Debug)]
pub struct StrongsDictionary {
    language: Language,
    entries: HashMap<StrongsCode, Arc<StrongsEntry>>,
}

impl StrongsDictionary {
    /// Parse a dictionary document.
    ///
    /// Keys that are not valid codes of `language` can never be resolved and are dropped, as
    /// are records missing a definition. Only a document that is not a JSON object of
    /// records fails the whole load.
    pub fn from_json(language: Language, json: &str) -> Result<Self, LoadError> {
        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;

        let mut entries = HashMap::with_capacity(raw.len());
        let mut skipped = 0usize;

        for (key, value) in raw {
            let code = match StrongsCode::parse(&key) {
                Ok(code) if code.language() == language => code,
                _ => {
                    tracing::warn!("Skipping {} dictionary key {:?}", language, key);
                    skipped += 1;
                    continue;
                }
            };

            match serde_json::from_value::<RawEntry>(value) {
                Ok(record) => {
                    entries.insert(code, Arc::new(StrongsEntry::from(record)));
                }
                Err(e) => {
                    tracing::warn!("Skipping {} entry {}: {}", language, code, e);
                    skipped += 1;
                }
            }
        }

        tracing::debug!(
            "Parsed {} {} entries ({} skipped)",
            entries.len(),
            language,
            skipped
        );

        Ok(Self { language, entries })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Entry for `code`. Codes of the other language are never present.
    pub fn get(&self, code: &StrongsCode) -> Option<&Arc<StrongsEntry>> {
        if code.language() != self.language {
            return None;
        }
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StrongsCode, &Arc<StrongsEntry>)> {
        self.entries.iter()
    }

    /// All entries ordered by code number
    pub fn sorted_entries(&self) -> Vec<(&StrongsCode, &StrongsEntry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(code, entry)| (code, entry.as_ref()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("HTTP {status} fetching {url}")]
    Http { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
