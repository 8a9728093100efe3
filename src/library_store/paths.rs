use crate::error::{IoResultExt, LibraryError, LibraryResult};
use crate::library::Collection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const ALBUM_DIR: &str = "album";
const COVER_DIR: &str = "cover";
const COLLECTION_FILE: &str = "collection.json";
const MUSIC_DIR: &str = "music";
const COVER_EXTENSION: &str = "png";

/// On-disk layout of a library:
///
/// ```text
/// <root>/album/collection.json
/// <root>/album/cover/<album title>.png
/// <root>/music/<music title>
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryPaths {
    root: PathBuf,
}

impl LibraryPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self) -> PathBuf {
        self.root.join(ALBUM_DIR).join(COLLECTION_FILE)
    }

    pub fn cover_dir(&self) -> PathBuf {
        self.root.join(ALBUM_DIR).join(COVER_DIR)
    }

    pub fn cover_path(&self, album_title: &str) -> PathBuf {
        self.cover_dir()
            .join(format!("{}.{}", album_title, COVER_EXTENSION))
    }

    pub fn music_dir(&self) -> PathBuf {
        self.root.join(MUSIC_DIR)
    }

    pub fn music_path(&self, music_title: &str) -> PathBuf {
        self.music_dir().join(music_title)
    }

    /// Creates the directory tree and, if missing, an empty collection file.
    pub fn ensure_layout(&self) -> LibraryResult<()> {
        let cover_dir = self.cover_dir();
        fs::create_dir_all(&cover_dir).at_path(&cover_dir)?;
        let music_dir = self.music_dir();
        fs::create_dir_all(&music_dir).at_path(&music_dir)?;

        let collection_path = self.collection_path();
        match fs::metadata(&collection_path) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("Creating empty collection at {:?}", collection_path);
                let data = serde_json::to_vec_pretty(&Collection::default()).map_err(|source| {
                    LibraryError::Format {
                        path: collection_path.clone(),
                        source,
                    }
                })?;
                fs::write(&collection_path, data).at_path(&collection_path)
            }
            Err(err) => Err(err).at_path(&collection_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let paths = LibraryPaths::new("/lib");
        assert_eq!(
            paths.collection_path(),
            PathBuf::from("/lib/album/collection.json")
        );
        assert_eq!(
            paths.cover_path("Album (0)"),
            PathBuf::from("/lib/album/cover/Album (0).png")
        );
        assert_eq!(
            paths.music_path("so what.mp3"),
            PathBuf::from("/lib/music/so what.mp3")
        );
    }

    #[test]
    fn test_ensure_layout_creates_empty_collection() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::new(temp_dir.path());

        paths.ensure_layout().unwrap();

        assert!(paths.cover_dir().is_dir());
        assert!(paths.music_dir().is_dir());
        let content = fs::read_to_string(paths.collection_path()).unwrap();
        let collection: Collection = serde_json::from_str(&content).unwrap();
        assert!(collection.albums.is_empty());
    }

    #[test]
    fn test_ensure_layout_keeps_existing_collection() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::new(temp_dir.path());
        paths.ensure_layout().unwrap();

        let existing = r#"{"date":"2024-01-01T00:00:00Z","albums":[{"title":"Jazz","date":"2024-01-01T00:00:00Z","music":[]}]}"#;
        fs::write(paths.collection_path(), existing).unwrap();

        paths.ensure_layout().unwrap();

        assert_eq!(
            fs::read_to_string(paths.collection_path()).unwrap(),
            existing
        );
    }
}
