mod cover_art;
mod json_store;
mod paths;
mod trait_def;

pub use cover_art::{placeholder_cover_png, solid_cover_png};
pub use json_store::JsonLibraryStore;
pub use paths::LibraryPaths;
pub use trait_def::{LibraryStore, LoadProblem, LoadedCollection};
