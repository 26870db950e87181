use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use scroll_config::Config;

/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "scroll.json";

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

/// Config file (explicit path, else `scroll.json` if present, else defaults), then env overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let default_file = Path::new(DEFAULT_CONFIG_FILE);

    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None if default_file.exists() => read_config_file(default_file)?,
        None => Config::default(),
    };

    config.apply_env();
    Ok(config)
}

/// Command line flags win over everything else
pub fn apply_overrides(config: &mut Config, data_dir: Option<&str>) {
    if let Some(dir) = data_dir {
        config.dictionary.data_dir = dir.to_string();
        config.library.data_dir = dir.to_string();
    }
}
