use crate::error::{LibraryError, LibraryResult};

/// Titles are used verbatim as file names, so they must be a single,
/// non-empty path component.
pub fn validate_title(title: &str) -> LibraryResult<()> {
    let trimmed = title.trim();
    if trimmed.is_empty()
        || title == "."
        || title == ".."
        || title.contains(['/', '\\', '\0'])
    {
        return Err(LibraryError::InvalidTitle(title.to_string()));
    }
    Ok(())
}
