//! Meowy Library
//!
//! Keeps a directory of audio files and album covers in sync with the
//! `collection.json` catalog describing them.

pub mod config;
pub mod error;
pub mod library;
pub mod library_store;
pub mod manager;
pub mod observable;
pub mod query;
pub mod resolve;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{LibraryError, LibraryResult};
pub use library::{Album, Collection, Cover, Music};
pub use library_store::{JsonLibraryStore, LibraryPaths, LibraryStore, LoadProblem};
pub use manager::{LibraryManager, SharedLibrary};
pub use observable::{Observable, Subject, SubscriptionId};
pub use selection::{MusicSelection, Selection};
