use scroll_config::Config;
use scroll_strongs::{DictionaryStore, source_from_config};

pub struct AppState {
    pub config: Config,
    /// Process-wide dictionary cache, loaded on first lookup
    pub store: DictionaryStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = DictionaryStore::new(source_from_config(&config.dictionary));

        Self { config, store }
    }
}
