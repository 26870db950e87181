use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use scroll_config::SourceKind;
use scroll_config::dictionary::DictionaryConfig;
use scroll_core::{DictionarySource, Language, LoadError};

/// Dictionaries read from the local filesystem
pub struct FileSource {
    hebrew: PathBuf,
    greek: PathBuf,
}

impl FileSource {
    pub fn new(hebrew: impl Into<PathBuf>, greek: impl Into<PathBuf>) -> Self {
        Self {
            hebrew: hebrew.into(),
            greek: greek.into(),
        }
    }

    /// Conventional file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(Language::Hebrew.file_name()),
            dir.join(Language::Greek.file_name()),
        )
    }

    pub fn path(&self, language: Language) -> &Path {
        match language {
            Language::Hebrew => &self.hebrew,
            Language::Greek => &self.greek,
        }
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self, language: Language) -> Result<String, LoadError> {
        let path = self.path(language);
        match tokio::fs::read_to_string(path).await {
            Ok(json) => Ok(json),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(LoadError::FileNotFound(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self, language: Language) -> String {
        self.path(language).display().to_string()
    }
}

/// Dictionaries served over HTTP as `<base_url>/strongs-<language>-dictionary.json`
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, language: Language) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            language.file_name()
        )
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self, language: Language) -> Result<String, LoadError> {
        let url = self.url(language);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                url,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }

    fn describe(&self, language: Language) -> String {
        self.url(language)
    }
}

/// Build the source described by the dictionary config
pub fn source_from_config(config: &DictionaryConfig) -> Arc<dyn DictionarySource> {
    match config.source {
        SourceKind::File => {
            let defaults = FileSource::in_dir(&config.data_dir);
            let hebrew = config
                .hebrew_path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(defaults.hebrew);
            let greek = config
                .greek_path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(defaults.greek);
            Arc::new(FileSource::new(hebrew, greek))
        }
        SourceKind::Http => Arc::new(HttpSource::new(config.base_url.clone())),
    }
}
