use std::path::PathBuf;

/// Handle to an album cover found on disk. Cover bytes are opaque here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cover {
    pub path: PathBuf,
    pub size: u64,
}
