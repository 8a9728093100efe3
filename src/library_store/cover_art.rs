use crate::error::LibraryResult;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Encodes a 1x1 PNG of the given color.
pub fn solid_cover_png(color: [u8; 4]) -> LibraryResult<Vec<u8>> {
    let image = RgbaImage::from_pixel(1, 1, Rgba(color));
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Default cover for new albums: a single opaque pixel of a random color.
pub fn placeholder_cover_png() -> LibraryResult<Vec<u8>> {
    let [r, g, b]: [u8; 3] = rand::random();
    solid_cover_png([r, g, b, u8::MAX])
}
