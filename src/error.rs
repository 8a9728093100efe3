//! Error types shared by the library store, the resolver and the mutation pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by every public library operation.
///
/// The `Display` output is meant to be shown to the user as-is.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed collection file {path:?}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("album \"{0}\" already exists")]
    DuplicateTitle(String),

    #[error("album \"{0}\" not found")]
    AlbumNotFound(String),

    #[error("music \"{music}\" not found in album \"{album}\"")]
    MusicNotFound { album: String, music: String },

    #[error("no album selected")]
    NoAlbumSelected,

    #[error("invalid title: {0:?}")]
    InvalidTitle(String),

    #[error("Cover encoding error: {0}")]
    CoverEncoding(#[from] image::ImageError),
}

impl LibraryError {
    /// True for both album and music identity-resolution failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LibraryError::AlbumNotFound(_) | LibraryError::MusicNotFound { .. }
        )
    }
}

pub type LibraryResult<T> = std::result::Result<T, LibraryError>;

/// Attaches the offending path to a raw `std::io::Error`.
pub trait IoResultExt<T> {
    fn at_path<P: AsRef<Path>>(self, path: P) -> LibraryResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path<P: AsRef<Path>>(self, path: P) -> LibraryResult<T> {
        self.map_err(|source| LibraryError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Turns "file does not exist" into success, keeping every other error.
pub(crate) fn tolerate_not_found(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
