use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "old",
            Testament::New => "new",
        }
    }

    /// Parse `old`/`new` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "old" => Some(Testament::Old),
            "new" => Some(Testament::New),
            _ => None,
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog row for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    /// File-name style id, e.g. `1Samuel`
    pub id: String,
    /// Human readable name, e.g. `1 Samuel`
    #[serde(rename = "name")]
    pub display_name: String,
    pub testament: Testament,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verse {
    pub verse: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub chapter: String,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub book: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Find a chapter by its number. Chapter numbers are stored as strings in the source data.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|c| c.chapter.trim().parse::<u32>().ok() == Some(number))
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}
