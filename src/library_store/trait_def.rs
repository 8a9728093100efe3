//! LibraryStore trait definition.
//!
//! Abstracts the persistence of the collection so the manager does not care
//! where the catalog lives.

use super::LibraryPaths;
use crate::error::LibraryResult;
use crate::library::{Album, Collection, Music};
use std::path::PathBuf;

/// Non-fatal issue found while enriching a freshly read collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadProblem {
    MissingMusicFile {
        album: String,
        music: String,
        path: PathBuf,
    },
    MissingCover {
        album: String,
        path: PathBuf,
    },
}

/// Result of a load: the enriched collection plus whatever was off on disk.
#[derive(Clone, Debug)]
pub struct LoadedCollection {
    pub collection: Collection,
    pub problems: Vec<LoadProblem>,
}

/// Trait for collection storage backends.
pub trait LibraryStore: Send {
    fn paths(&self) -> &LibraryPaths;

    /// Reads the collection and fills the derived fields (music sizes,
    /// cover handles) from the filesystem.
    fn load(&self) -> LibraryResult<LoadedCollection>;

    /// Fully overwrites the persisted collection.
    fn save(&self, collection: &Collection) -> LibraryResult<()>;

    /// Re-reads the track sizes of one album from disk.
    fn read_music_listing(&self, album: &Album) -> LibraryResult<Vec<Music>>;
}
