use std::env;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "public/data".to_string()
}

/// Location of the per-book scripture JSON files (`Genesis.json`, ...)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LibraryConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl LibraryConfig {
    pub(crate) fn apply_env(&mut self) {
        if let Ok(dir) = env::var("SCROLL_DATA_DIR") {
            self.data_dir = dir;
        }
    }
}
