use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single track. `title` doubles as the file name in the music repository.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Music {
    pub title: String,
    #[serde(default)]
    pub date: DateTime<Utc>,

    /// Size of the backing file, read from disk at load time.
    /// `None` when the file was missing.
    #[serde(skip)]
    pub file_size: Option<u64>,
}

impl Music {
    pub fn new<S: Into<String>>(title: S, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            date,
            file_size: None,
        }
    }

    /// Title without its file extension, the form used to match tracks.
    pub fn simple_title(&self) -> &str {
        Path::new(&self.title)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.title)
    }
}
