use super::{null_as_empty, Album};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The whole library as described by `collection.json`.
///
/// Album titles are unique (case-sensitive). Album order carries no meaning
/// besides display.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Collection {
    #[serde(default)]
    pub date: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub albums: Vec<Album>,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Collection {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            albums: Vec::new(),
        }
    }

    pub fn contains_album(&self, title: &str) -> bool {
        self.albums.iter().any(|a| a.title == title)
    }

    pub fn albums_count(&self) -> usize {
        self.albums.len()
    }

    pub fn music_count(&self) -> usize {
        self.albums.iter().map(|a| a.music.len()).sum()
    }

    /// First of `"Album (0)"`, `"Album (1)"`, ... not used by any album.
    pub fn next_placeholder_title(&self) -> String {
        let mut index: u64 = 0;
        loop {
            let title = format!("Album ({})", index);
            if !self.contains_album(&title) {
                return title;
            }
            index += 1;
        }
    }

    /// Removes the album at `index` by moving the last album into its slot.
    /// Album order is not preserved.
    pub fn remove_album_unordered(&mut self, index: usize) -> Album {
        self.albums.swap_remove(index)
    }
}
