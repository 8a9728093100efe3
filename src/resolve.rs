//! Identity resolution.
//!
//! Albums and music handed out to consumers are copies. Before mutating,
//! a copy must be mapped back to the live record inside the cached
//! collection, matching albums by title and music by simple title.

use crate::error::{LibraryError, LibraryResult};
use crate::library::{Album, Collection, Music};

pub fn album_index(collection: &Collection, title: &str) -> LibraryResult<usize> {
    collection
        .albums
        .iter()
        .position(|a| a.title == title)
        .ok_or_else(|| LibraryError::AlbumNotFound(title.to_string()))
}

pub fn resolve_album<'a>(collection: &'a Collection, title: &str) -> LibraryResult<&'a Album> {
    let index = album_index(collection, title)?;
    Ok(&collection.albums[index])
}

pub fn resolve_album_mut<'a>(
    collection: &'a mut Collection,
    title: &str,
) -> LibraryResult<&'a mut Album> {
    let index = album_index(collection, title)?;
    Ok(&mut collection.albums[index])
}

/// Matches on `Music::simple_title`, so `"track"` and `"track.mp3"` are
/// the same identity.
pub fn music_index(album: &Album, candidate: &Music) -> LibraryResult<usize> {
    let wanted = candidate.simple_title();
    album
        .music
        .iter()
        .position(|m| m.simple_title() == wanted)
        .ok_or_else(|| LibraryError::MusicNotFound {
            album: album.title.clone(),
            music: candidate.title.clone(),
        })
}

pub fn resolve_music_mut<'a>(
    album: &'a mut Album,
    candidate: &Music,
) -> LibraryResult<&'a mut Music> {
    let index = music_index(album, candidate)?;
    Ok(&mut album.music[index])
}
