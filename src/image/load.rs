//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::error::{Error, Result};

use super::RgbaCanvas;

/// Load an image from disk and convert it to 8-bit RGBA.
///
/// Any format the `image` crate can decode is accepted. The format is sniffed
/// from the file's leading bytes, so a JPEG saved as `icon.png` still loads;
/// the extension is only a fallback. Images without an alpha channel get a
/// fully opaque one.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaCanvas> {
    let path = path.as_ref();

    let load_error = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|err| load_error(ImageError::IoError(err)))?
        .decode()
        .map_err(load_error)?;

    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(to_rgba(img))
}

fn to_rgba(img: DynamicImage) -> RgbaCanvas {
    img.into_rgba8()
}
