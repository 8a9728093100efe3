//! Library context and mutation pipeline.
//!
//! Every mutation follows the same protocol: resolve the live record, mutate
//! the cached collection, apply the filesystem side effect, then reload.
//! Reloading saves the cached collection and reads it back, so derived
//! fields always come from disk. Errors are returned as soon as they happen
//! and nothing is rolled back; the next successful reload resynchronizes
//! the cache with disk.

use crate::config::AppConfig;
use crate::error::{tolerate_not_found, IoResultExt, LibraryError, LibraryResult};
use crate::library::{validate_title, Album, Collection, Music};
use crate::library_store::{
    placeholder_cover_png, JsonLibraryStore, LibraryPaths, LibraryStore, LoadProblem,
};
use crate::observable::Observable;
use crate::resolve::{album_index, music_index, resolve_album, resolve_album_mut};
use crate::selection::Selection;
use chrono::Utc;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// A manager behind the single writer lock needed by concurrent front ends.
pub type SharedLibrary = Arc<Mutex<LibraryManager>>;

pub struct LibraryManager {
    store: Box<dyn LibraryStore>,
    collection: Observable<Collection>,
    selection: Selection,
    load_problems: Vec<LoadProblem>,
}

impl LibraryManager {
    /// Creates the on-disk layout if needed and loads the collection.
    pub fn open(store: Box<dyn LibraryStore>) -> LibraryResult<Self> {
        store.paths().ensure_layout()?;
        let loaded = store.load()?;
        log_problems(&loaded.problems);
        info!(
            "Library has:\n{} albums\n{} music",
            loaded.collection.albums_count(),
            loaded.collection.music_count()
        );

        Ok(Self {
            store,
            collection: Observable::new(loaded.collection),
            selection: Selection::new(),
            load_problems: loaded.problems,
        })
    }

    pub fn from_config(config: &AppConfig) -> LibraryResult<Self> {
        let store = JsonLibraryStore::new(
            LibraryPaths::new(&config.library_root),
            config.strict_media_check,
        );
        Self::open(Box::new(store))
    }

    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(Mutex::new(self))
    }

    pub fn paths(&self) -> &LibraryPaths {
        self.store.paths()
    }

    pub fn collection(&self) -> &Collection {
        self.collection.get()
    }

    /// The collection cache, for subscribing to reloads.
    pub fn collection_observable(&mut self) -> &mut Observable<Collection> {
        &mut self.collection
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selection state, for subscribing to selection events.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Problems found by the most recent load.
    pub fn load_problems(&self) -> &[LoadProblem] {
        &self.load_problems
    }

    /// Detached copy of the album titled `title`.
    pub fn album(&self, title: &str) -> LibraryResult<Album> {
        resolve_album(self.collection.get(), title).cloned()
    }

    /// Persists the cached collection, reads it back and publishes it.
    pub fn reload(&mut self) -> LibraryResult<()> {
        self.store.save(self.collection.get())?;
        let loaded = self.store.load()?;
        log_problems(&loaded.problems);
        self.load_problems = loaded.problems;
        self.collection.set(loaded.collection);
        Ok(())
    }

    /// Adds an album with the first free `"Album (N)"` title and a random
    /// placeholder cover. Returns the new title.
    pub fn add_album(&mut self) -> LibraryResult<String> {
        let title = self.collection.get().next_placeholder_title();
        info!("Adding album \"{}\"", title);

        let album = Album::new(title.clone(), Utc::now());
        self.collection.get_mut().albums.push(album);

        let cover = placeholder_cover_png()?;
        let cover_path = self.paths().cover_path(&title);
        fs::write(&cover_path, cover).at_path(&cover_path)?;

        self.reload()?;
        Ok(title)
    }

    /// Imports `source` into `album`, copying it into the music repository
    /// under its file name. A track with the same name gets its file
    /// overwritten. Returns the refreshed album.
    pub fn add_music(&mut self, album: &Album, source: &Path) -> LibraryResult<Album> {
        let title = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LibraryError::InvalidTitle(source.to_string_lossy().to_string()))?
            .to_string();
        validate_title(&title)?;
        info!("Adding {:?} to album \"{}\"", source, album.title);

        let live = resolve_album_mut(self.collection.get_mut(), &album.title)?;
        live.music.push(Music::new(title.clone(), Utc::now()));

        let destination = self.paths().music_path(&title);
        if is_same_file(source, &destination) {
            debug!("{:?} is already in the music repository", source);
        } else {
            fs::copy(source, &destination).at_path(source)?;
        }

        self.reload()?;
        self.follow_selection(&album.title, Some(&album.title))?;
        self.album(&album.title)
    }

    /// Deletes `album` and its cover. The last album takes its place.
    pub fn delete_album(&mut self, album: &Album) -> LibraryResult<()> {
        info!("Deleting album \"{}\"", album.title);
        let index = album_index(self.collection.get(), &album.title)?;

        let cover_path = self.paths().cover_path(&album.title);
        tolerate_not_found(fs::remove_file(&cover_path)).at_path(&cover_path)?;

        self.collection.get_mut().remove_album_unordered(index);

        self.reload()?;
        self.follow_selection(&album.title, None)
    }

    /// Removes `music` from `album`. The backing audio file stays on disk.
    /// Returns the refreshed album.
    pub fn delete_music(&mut self, album: &Album, music: &Music) -> LibraryResult<Album> {
        info!("Deleting \"{}\" from album \"{}\"", music.title, album.title);
        let live = resolve_album_mut(self.collection.get_mut(), &album.title)?;
        let index = music_index(live, music)?;
        live.remove_music_unordered(index);

        self.reload()?;
        self.follow_selection(&album.title, Some(&album.title))?;
        self.album(&album.title)
    }

    /// Renames `album` and its cover file. Renaming to the current title is
    /// a no-op.
    pub fn rename_album(&mut self, album: &Album, title: &str) -> LibraryResult<()> {
        validate_title(title)?;
        let index = album_index(self.collection.get(), &album.title)?;
        if album.title == title {
            return Ok(());
        }
        if self.collection.get().contains_album(title) {
            return Err(LibraryError::DuplicateTitle(title.to_string()));
        }
        info!("Renaming album \"{}\" to \"{}\"", album.title, title);

        let now = Utc::now();
        let collection = self.collection.get_mut();
        collection.date = now;
        let live = &mut collection.albums[index];
        live.date = now;
        live.title = title.to_string();

        let old_cover = self.paths().cover_path(&album.title);
        let new_cover = self.paths().cover_path(title);
        tolerate_not_found(fs::rename(&old_cover, &new_cover)).at_path(&old_cover)?;

        self.reload()?;
        self.follow_selection(&album.title, Some(title))
    }

    /// Overwrites the cover of `album` with the bytes of `image_path`.
    /// The bytes are not checked to be an image.
    pub fn update_album_cover(&mut self, album: &Album, image_path: &Path) -> LibraryResult<()> {
        info!("Updating cover of \"{}\" from {:?}", album.title, image_path);
        let index = album_index(self.collection.get(), &album.title)?;
        let now = Utc::now();
        let collection = self.collection.get_mut();
        collection.date = now;
        collection.albums[index].date = now;

        let cover = fs::read(image_path).at_path(image_path)?;
        let cover_path = self.paths().cover_path(&album.title);
        fs::write(&cover_path, cover).at_path(&cover_path)?;

        self.reload()?;
        self.follow_selection(&album.title, Some(&album.title))
    }

    pub fn set_selected_album(&mut self, album: &Album) -> LibraryResult<()> {
        let live = resolve_album(self.collection.get(), &album.title)?.clone();
        let store = &self.store;
        self.selection
            .select_album(live, |a| store.read_music_listing(a))
    }

    pub fn set_selected_music(&mut self, music: &Music) -> LibraryResult<()> {
        self.selection.select_music(music)
    }

    /// Keeps the selection pointing at the album that used to be titled
    /// `previous_title`, or clears it when that album is gone.
    fn follow_selection(
        &mut self,
        previous_title: &str,
        current_title: Option<&str>,
    ) -> LibraryResult<()> {
        let is_selected = self
            .selection
            .album()
            .is_some_and(|selected| selected.title == previous_title);
        if !is_selected {
            return Ok(());
        }

        match current_title {
            None => {
                self.selection.clear();
                Ok(())
            }
            Some(title) => {
                let live = resolve_album(self.collection.get(), title)?.clone();
                let store = &self.store;
                self.selection
                    .select_album(live, |a| store.read_music_listing(a))
            }
        }
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn log_problems(problems: &[LoadProblem]) {
    if problems.is_empty() {
        return;
    }
    warn!("Found {} problems:", problems.len());
    for problem in problems.iter() {
        warn!("- {:?}", problem);
    }
}
