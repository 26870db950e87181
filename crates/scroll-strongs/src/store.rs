use std::sync::Arc;

use scroll_core::{
    DictionarySource, Language, LoadError, LookupResult, NotFoundReason, StrongsCode,
    StrongsDictionary,
};
use tokio::sync::OnceCell;

/// Lazily loaded, write-once cache of the Hebrew and Greek dictionaries.
///
/// Each language is fetched at most once per successful load. Callers that arrive while a
/// load is in flight wait on it instead of starting another fetch. A failed load leaves the
/// slot empty so a later call can try again.
pub struct DictionaryStore {
    source: Arc<dyn DictionarySource>,
    hebrew: OnceCell<Arc<StrongsDictionary>>,
    greek: OnceCell<Arc<StrongsDictionary>>,
}

impl DictionaryStore {
    pub fn new(source: Arc<dyn DictionarySource>) -> Self {
        Self {
            source,
            hebrew: OnceCell::new(),
            greek: OnceCell::new(),
        }
    }

    fn slot(&self, language: Language) -> &OnceCell<Arc<StrongsDictionary>> {
        match language {
            Language::Hebrew => &self.hebrew,
            Language::Greek => &self.greek,
        }
    }

    pub async fn load(&self, language: Language) -> Result<Arc<StrongsDictionary>, LoadError> {
        let dictionary = self
            .slot(language)
            .get_or_try_init(|| self.fetch_and_parse(language))
            .await?;
        Ok(Arc::clone(dictionary))
    }

    pub async fn load_hebrew(&self) -> Result<Arc<StrongsDictionary>, LoadError> {
        self.load(Language::Hebrew).await
    }

    pub async fn load_greek(&self) -> Result<Arc<StrongsDictionary>, LoadError> {
        self.load(Language::Greek).await
    }

    /// Already-loaded dictionary, without suspending
    pub fn loaded(&self, language: Language) -> Option<Arc<StrongsDictionary>> {
        self.slot(language).get().cloned()
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.slot(language).initialized()
    }

    async fn fetch_and_parse(&self, language: Language) -> Result<Arc<StrongsDictionary>, LoadError> {
        let location = self.source.describe(language);
        tracing::info!("Loading {} dictionary from {}", language, location);

        let json = self.source.fetch(language).await.inspect_err(|e| {
            tracing::warn!("Failed to fetch {} dictionary from {}: {}", language, location, e)
        })?;

        let dictionary = StrongsDictionary::from_json(language, &json).inspect_err(|e| {
            tracing::warn!("Failed to parse {} dictionary from {}: {}", language, location, e)
        })?;

        tracing::info!("Loaded {} {} dictionary entries", dictionary.len(), language);
        Ok(Arc::new(dictionary))
    }

    /// Resolve a reference code against the dictionary its prefix selects.
    ///
    /// Never fails: malformed codes, misses and load failures all come back as
    /// [`LookupResult::NotFound`]. Malformed codes do not trigger a load.
    pub async fn resolve(&self, code: &str) -> LookupResult {
        match StrongsCode::parse(code) {
            Ok(code) => self.resolve_code(&code).await,
            Err(e) => {
                tracing::debug!("Rejected reference {:?}: {}", code, e);
                LookupResult::NotFound(NotFoundReason::MalformedCode)
            }
        }
    }

    /// Resolve a validated code. For explicit targeting build the code with
    /// [`StrongsCode::parse_in`], so it cannot name the other dictionary.
    pub async fn resolve_code(&self, code: &StrongsCode) -> LookupResult {
        let language = code.language();

        let dictionary = match self.load(language).await {
            Ok(dictionary) => dictionary,
            Err(e) => {
                return LookupResult::NotFound(NotFoundReason::DictionaryLoadFailure(e.to_string()));
            }
        };

        match dictionary.get(code) {
            Some(entry) => LookupResult::Found {
                entry: Arc::clone(entry),
                language,
            },
            None => {
                tracing::debug!("No {} entry for {}", language, code);
                LookupResult::NotFound(NotFoundReason::UnknownCode)
            }
        }
    }
}
