use scroll_config::{Config, LogFormat, SourceKind};

use crate::settings::{apply_overrides, load_config};

#[test]
fn reads_partial_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scroll.json");
    std::fs::write(
        &path,
        r#"{ "dictionary": { "hebrew_path": "lexicon/hebrew.json" }, "log_format": "json" }"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.dictionary.hebrew_path.as_deref(), Some("lexicon/hebrew.json"));
    assert!(config.dictionary.greek_path.is_none());
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
    assert!(err.to_string().contains("failed to open config"), "{err}");
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scroll.json");
    std::fs::write(&path, r#"{ "dictionary": { "source": "ftp" } }"#).unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"), "{err}");
}

#[test]
fn data_dir_flag_overrides_both_locations() {
    let mut config = Config::default();
    apply_overrides(&mut config, Some("/srv/kjv"));

    assert_eq!(config.dictionary.data_dir, "/srv/kjv");
    assert_eq!(config.library.data_dir, "/srv/kjv");
    assert_eq!(config.dictionary.source, SourceKind::File);
}
