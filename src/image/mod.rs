//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::save_png;

use image::{ImageBuffer, Rgba};

/// Working image type. Every source is converted to 8-bit RGBA on load.
pub type RgbaCanvas = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Fill color of a freshly allocated canvas: fully transparent black.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
