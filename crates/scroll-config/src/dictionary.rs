use std::env;

use serde::{Deserialize, Serialize};

/// Where Strong's dictionary JSON is fetched from
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Http,
}

fn default_source() -> SourceKind {
    SourceKind::File
}

fn default_data_dir() -> String {
    "public/data".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000/data".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_source")]
    pub source: SourceKind,
    /// Directory holding `strongs-hebrew-dictionary.json` / `strongs-greek-dictionary.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Base URL the dictionary files are served under when `source` is `http`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Explicit file overrides, relative paths are taken as-is
    pub hebrew_path: Option<String>,
    pub greek_path: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            data_dir: default_data_dir(),
            base_url: default_base_url(),
            hebrew_path: None,
            greek_path: None,
        }
    }
}

impl DictionaryConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(dir) = env::var("SCROLL_DATA_DIR") {
            self.data_dir = dir;
        }

        // Setting a URL implies fetching over HTTP
        if let Ok(url) = env::var("SCROLL_DICTIONARY_URL") {
            self.base_url = url;
            self.source = SourceKind::Http;
        }
    }
}
