use std::sync::Arc;

use crate::dictionary::StrongsEntry;
use crate::language::Language;

/// Text shown when a code cannot be resolved, whatever the reason
pub const NO_REFERENCE: &str = "no reference available";

/// Outcome of resolving one reference code
#[derive(Debug, Clone)]
pub enum LookupResult {
    Found {
        entry: Arc<StrongsEntry>,
        language: Language,
    },
    NotFound(NotFoundReason),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundReason {
    #[error("malformed reference code")]
    MalformedCode,

    #[error("reference code is not in the dictionary")]
    UnknownCode,

    #[error("dictionary failed to load: {0}")]
    DictionaryLoadFailure(String),
}

impl NotFoundReason {
    /// Only load failures can go away on a later attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, NotFoundReason::DictionaryLoadFailure(_))
    }
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }

    pub fn entry(&self) -> Option<&StrongsEntry> {
        match self {
            LookupResult::Found { entry, .. } => Some(entry),
            LookupResult::NotFound(_) => None,
        }
    }

    pub fn language(&self) -> Option<Language> {
        match self {
            LookupResult::Found { language, .. } => Some(*language),
            LookupResult::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&NotFoundReason> {
        match self {
            LookupResult::Found { .. } => None,
            LookupResult::NotFound(reason) => Some(reason),
        }
    }

    /// One-line gloss for overlays; misses degrade to [`NO_REFERENCE`]
    pub fn summary(&self) -> &str {
        self.entry()
            .map(|e| e.strongs_definition.as_str())
            .unwrap_or(NO_REFERENCE)
    }
}
