use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::library::LibraryConfig;

pub mod dictionary;
pub mod library;

pub use self::dictionary::SourceKind;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub library: LibraryConfig,

    pub log_format: LogFormat,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Environment variables win over values read from a config file
    pub fn apply_env(&mut self) {
        self.dictionary.apply_env();
        self.library.apply_env();

        if let Some(format) = env::var("SCROLL_LOG_FORMAT")
            .ok()
            .and_then(|v| LogFormat::parse(&v))
        {
            self.log_format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "dictionary": { "source": "http" } }"#).unwrap();

        assert_eq!(config.dictionary.source, SourceKind::Http);
        assert_eq!(config.dictionary.data_dir, "public/data");
        assert_eq!(config.dictionary.base_url, "http://localhost:3000/data");
        assert_eq!(config.library.data_dir, "public/data");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn empty_json_is_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.dictionary.source, SourceKind::File);
        assert!(config.dictionary.hebrew_path.is_none());
    }

    #[test]
    fn log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("xml"), None);
    }
}
