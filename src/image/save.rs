//! Image saving utilities.

use std::path::Path;

use image::ImageFormat;

use crate::error::{Error, Result};

use super::RgbaCanvas;

/// Save an RGBA image as PNG.
///
/// The encoding is always PNG, whatever extension `path` carries. An existing
/// file at `path` is overwritten.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if the file cannot be created or encoded.
pub fn save_png<P: AsRef<Path>>(img: &RgbaCanvas, path: P) -> Result<()> {
    let path = path.as_ref();

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
