//! Currently selected album and music.
//!
//! Not persisted. Each piece of state is its own observable so consumers can
//! subscribe to just what they render.

use crate::error::{LibraryError, LibraryResult};
use crate::library::{Album, Music};
use crate::observable::Observable;
use crate::resolve::music_index;
use tracing::debug;

/// Everything a consumer needs to act on a selected track without a lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MusicSelection {
    pub album: Album,
    pub listing: Vec<Music>,
    pub music: Music,
}

#[derive(Default)]
pub struct Selection {
    album: Observable<Option<Album>>,
    listing: Observable<Vec<Music>>,
    music: Observable<Option<MusicSelection>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn album(&self) -> Option<&Album> {
        self.album.get().as_ref()
    }

    pub fn listing(&self) -> &[Music] {
        self.listing.get()
    }

    pub fn music(&self) -> Option<&MusicSelection> {
        self.music.get().as_ref()
    }

    /// Fires on every album selection, including re-selecting the same one.
    pub fn on_select_album(&mut self) -> &mut Observable<Option<Album>> {
        &mut self.album
    }

    /// Fires when the listing of the selected album is re-derived.
    pub fn on_listing_changed(&mut self) -> &mut Observable<Vec<Music>> {
        &mut self.listing
    }

    pub fn on_select_music(&mut self) -> &mut Observable<Option<MusicSelection>> {
        &mut self.music
    }

    /// Selects `album`. The listing is re-derived through `read_listing` only
    /// when the album differs from the current selection.
    pub fn select_album<F>(&mut self, album: Album, read_listing: F) -> LibraryResult<()>
    where
        F: FnOnce(&Album) -> LibraryResult<Vec<Music>>,
    {
        if self.album.get().as_ref() == Some(&album) {
            self.album.notify();
            return Ok(());
        }

        debug!("Selecting album \"{}\"", album.title);
        let listing = read_listing(&album)?;
        self.album.set(Some(album));
        self.listing.set(listing);
        self.follow_music();
        Ok(())
    }

    /// Selects a track of the current listing, matched by simple title.
    pub fn select_music(&mut self, music: &Music) -> LibraryResult<()> {
        let selection = self.music_selection(music)?;
        self.music.set(Some(selection));
        Ok(())
    }

    /// Re-resolves the selected track against a re-derived listing. The
    /// selection is dropped when the track is no longer listed.
    fn follow_music(&mut self) {
        let Some(previous) = self.music.get().as_ref().map(|s| s.music.clone()) else {
            return;
        };
        match self.music_selection(&previous) {
            Ok(selection) => self.music.set(Some(selection)),
            Err(_) => {
                debug!("Selected music \"{}\" is gone", previous.title);
                self.music.set(None);
            }
        }
    }

    fn music_selection(&self, music: &Music) -> LibraryResult<MusicSelection> {
        let Some(album) = self.album.get().clone() else {
            return Err(LibraryError::NoAlbumSelected);
        };

        let mut listed = album.clone();
        listed.music = self.listing.get().clone();
        let index = music_index(&listed, music)?;

        Ok(MusicSelection {
            music: listed.music[index].clone(),
            listing: listed.music,
            album,
        })
    }

    pub fn clear(&mut self) {
        self.album.set(None);
        self.listing.set(Vec::new());
        self.music.set(None);
    }
}
