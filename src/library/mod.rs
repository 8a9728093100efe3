mod album;
mod collection;
mod cover;
mod music;
mod title;

pub use album::Album;
pub use collection::Collection;
pub use cover::Cover;
pub use music::Music;
pub use title::validate_title;

use serde::{Deserialize, Deserializer};

/// Accepts both a missing/`null` list and a regular JSON array.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
