//! Test fixtures: temporary libraries with a known layout.

use anyhow::Result;
use meowy_library::{JsonLibraryStore, LibraryManager, LibraryPaths};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const JAZZ_TITLE: &str = "Jazz";
pub const ROCK_TITLE: &str = "Rock";
pub const SO_WHAT: &str = "so what.mp3";
pub const BLUE_IN_GREEN: &str = "blue in green.mp3";
pub const PARANOID: &str = "paranoid.mp3";

/// A collection written the way older versions of the player did: offset
/// timestamps with nanoseconds and `null` lists.
pub const LEGACY_COLLECTION_JSON: &str = r#"{
  "date": "2023-08-01T12:34:56.123456789+08:00",
  "albums": [
    {
      "title": "Jazz",
      "date": "2023-07-30T09:00:00.5+08:00",
      "music": [
        {"title": "so what.mp3", "date": "2023-07-30T09:01:00+08:00"},
        {"title": "blue in green.mp3", "date": "2023-07-30T09:02:00+08:00"}
      ]
    },
    {
      "title": "Rock",
      "date": "2023-07-31T10:00:00Z",
      "music": [
        {"title": "paranoid.mp3", "date": "2023-07-31T10:01:00Z"}
      ]
    },
    {
      "title": "Empty",
      "date": "2023-07-31T11:00:00Z",
      "music": null
    }
  ]
}"#;

pub fn open_store(root: &TempDir) -> JsonLibraryStore {
    JsonLibraryStore::new(LibraryPaths::new(root.path()), false)
}

pub fn open_manager(root: &TempDir) -> Result<LibraryManager> {
    Ok(LibraryManager::open(Box::new(open_store(root)))?)
}

/// Creates an empty library.
pub fn create_empty_library() -> Result<(TempDir, LibraryManager)> {
    let dir = TempDir::new()?;
    let manager = open_manager(&dir)?;
    Ok((dir, manager))
}

/// Creates a library from `LEGACY_COLLECTION_JSON` with every music file
/// and the Jazz and Rock covers present.
pub fn create_legacy_library() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let paths = LibraryPaths::new(dir.path());
    paths.ensure_layout()?;

    fs::write(paths.collection_path(), LEGACY_COLLECTION_JSON)?;
    fs::write(paths.music_path(SO_WHAT), vec![1u8; 100])?;
    fs::write(paths.music_path(BLUE_IN_GREEN), vec![2u8; 200])?;
    fs::write(paths.music_path(PARANOID), vec![3u8; 300])?;
    fs::write(paths.cover_path(JAZZ_TITLE), b"jazz cover")?;
    fs::write(paths.cover_path(ROCK_TITLE), b"rock cover")?;

    Ok(dir)
}

/// Writes an audio file outside the library, ready to be imported.
pub fn write_import_file(dir: &TempDir, name: &str, size: usize) -> Result<PathBuf> {
    let import_dir = dir.path().join("imports");
    fs::create_dir_all(&import_dir)?;
    let path = import_dir.join(name);
    fs::write(&path, vec![7u8; size])?;
    Ok(path)
}
