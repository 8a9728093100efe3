//! JSON-file backed library store.
//!
//! The collection file only carries titles and dates. File sizes and cover
//! handles are derived from the filesystem on every load, so a save followed
//! by a load always reflects what is actually on disk.

use super::trait_def::{LibraryStore, LoadProblem, LoadedCollection};
use super::LibraryPaths;
use crate::error::{IoResultExt, LibraryError, LibraryResult};
use crate::library::{Album, Collection, Cover, Music};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct JsonLibraryStore {
    paths: LibraryPaths,
    strict_media_check: bool,
}

impl JsonLibraryStore {
    /// Create a new store rooted at `paths`.
    ///
    /// With `strict_media_check`, a track whose file is missing fails the
    /// whole load instead of being reported as a problem.
    pub fn new(paths: LibraryPaths, strict_media_check: bool) -> Self {
        Self {
            paths,
            strict_media_check,
        }
    }

    fn read_collection(&self) -> LibraryResult<Collection> {
        let path = self.paths.collection_path();
        let data = fs::read(&path).at_path(&path)?;
        serde_json::from_slice(&data).map_err(|source| LibraryError::Format { path, source })
    }

    /// Returns `None` when the file does not exist.
    fn file_size(path: &Path) -> LibraryResult<Option<u64>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).at_path(path),
        }
    }

    fn enrich_music(
        &self,
        album_title: &str,
        music: &mut Music,
        problems: &mut Vec<LoadProblem>,
    ) -> LibraryResult<()> {
        let path = self.paths.music_path(&music.title);
        music.file_size = Self::file_size(&path)?;
        if music.file_size.is_none() {
            if self.strict_media_check {
                return Err(std::io::Error::from(ErrorKind::NotFound)).at_path(&path);
            }
            warn!(
                "Music file for \"{}\" in album \"{}\" is missing: {:?}",
                music.title, album_title, path
            );
            problems.push(LoadProblem::MissingMusicFile {
                album: album_title.to_string(),
                music: music.title.clone(),
                path,
            });
        }
        Ok(())
    }

    fn enrich_album(&self, album: &mut Album, problems: &mut Vec<LoadProblem>) -> LibraryResult<()> {
        let cover_path = self.paths.cover_path(&album.title);
        album.cover = Self::file_size(&cover_path)?.map(|size| Cover {
            path: cover_path.clone(),
            size,
        });
        if album.cover.is_none() {
            debug!("No cover for album \"{}\"", album.title);
            problems.push(LoadProblem::MissingCover {
                album: album.title.clone(),
                path: cover_path,
            });
        }

        for music in album.music.iter_mut() {
            self.enrich_music(&album.title, music, problems)?;
        }
        Ok(())
    }
}

impl LibraryStore for JsonLibraryStore {
    fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    fn load(&self) -> LibraryResult<LoadedCollection> {
        let mut collection = self.read_collection()?;
        let mut problems = Vec::new();
        for album in collection.albums.iter_mut() {
            self.enrich_album(album, &mut problems)?;
        }

        if !problems.is_empty() {
            info!(
                "Collection loaded with {} non-fatal problems",
                problems.len()
            );
        }
        debug!(
            "Collection has {} albums, {} music",
            collection.albums_count(),
            collection.music_count()
        );
        Ok(LoadedCollection {
            collection,
            problems,
        })
    }

    fn save(&self, collection: &Collection) -> LibraryResult<()> {
        let path = self.paths.collection_path();
        let data = serde_json::to_vec_pretty(collection).map_err(|source| LibraryError::Format {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, data).at_path(&path)
    }

    /// Re-reads file sizes only. Missing files are already reported by `load`.
    fn read_music_listing(&self, album: &Album) -> LibraryResult<Vec<Music>> {
        let mut listing = album.music.clone();
        for music in listing.iter_mut() {
            music.file_size = Self::file_size(&self.paths.music_path(&music.title))?;
        }
        Ok(listing)
    }
}
