use super::{null_as_empty, Cover, Music};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    #[serde(default)]
    pub date: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub music: Vec<Music>,

    #[serde(skip)]
    pub cover: Option<Cover>,
}

impl Album {
    pub fn new<S: Into<String>>(title: S, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            date,
            music: Vec::new(),
            cover: None,
        }
    }

    /// Sum of the known track sizes; missing files count as zero.
    pub fn total_size(&self) -> u64 {
        self.music.iter().filter_map(|m| m.file_size).sum()
    }

    /// Removes the track at `index` by moving the last track into its slot.
    /// Track order is not preserved.
    pub fn remove_music_unordered(&mut self, index: usize) -> Music {
        self.music.swap_remove(index)
    }

    /// One-line summary used by list views.
    pub fn description(&self) -> String {
        format!(
            "{} | {} music | {:#} | {}",
            self.title,
            self.music.len(),
            byte_unit::Byte::from(self.total_size()),
            self.date.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn music(title: &str, size: Option<u64>) -> Music {
        let mut music = Music::new(title, Utc::now());
        music.file_size = size;
        music
    }

    #[test]
    fn test_remove_music_unordered() {
        let mut album = Album::new("Jazz", Utc::now());
        album.music = vec![
            music("a.mp3", None),
            music("b.mp3", None),
            music("c.mp3", None),
        ];

        let removed = album.remove_music_unordered(0);

        assert_eq!(removed.title, "a.mp3");
        let titles: Vec<_> = album.music.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["c.mp3", "b.mp3"]);
    }

    #[test]
    fn test_total_size_skips_missing() {
        let mut album = Album::new("Jazz", Utc::now());
        album.music = vec![music("a.mp3", Some(100)), music("b.mp3", None)];
        assert_eq!(album.total_size(), 100);
    }

    #[test]
    fn test_description() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        let mut album = Album::new("Jazz", date);
        album.music = vec![music("a.mp3", Some(2048))];

        let description = album.description();
        assert!(description.starts_with("Jazz | 1 music | "));
        assert!(description.ends_with("2024-03-01 10:30"));
    }

    #[test]
    fn test_deserialize_null_music() {
        let album: Album =
            serde_json::from_str(r#"{"title":"Jazz","date":"2024-03-01T10:30:00Z","music":null}"#)
                .unwrap();
        assert!(album.music.is_empty());
        assert!(album.cover.is_none());
    }
}
