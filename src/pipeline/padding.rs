//! Transparent padding around an icon.

use std::path::Path;

use ::image::Rgba;

use crate::error::{Error, Result};
use crate::image::{self, RgbaCanvas, TRANSPARENT};

use super::layout::Layout;

/// Canvas growth per side. Content ends up at roughly 70% of the padded icon.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.4;

/// Configuration for the padding pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Factor applied to each side of the source to size the canvas.
    pub scale_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `scale_factor` is not finite or is below 1.0.
    pub fn validate(&self) -> Result<()> {
        if !self.scale_factor.is_finite() || self.scale_factor < 1.0 {
            return Err(Error::InvalidParameter {
                name: "scale_factor".to_string(),
                reason: "must be a finite value of at least 1.0".to_string(),
            });
        }

        Ok(())
    }
}

/// Pads icon files on disk.
#[derive(Debug, Clone)]
pub struct Padder {
    config: Config,
}

impl Padder {
    /// Create a padder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this padder was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Pad the image at `input_path` and write it to `output_path` as PNG.
    ///
    /// `output_path` may be the same file as `input_path`; the source is fully
    /// decoded before the destination is opened. If loading fails the
    /// destination is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be loaded, padded, or saved.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Padding image: {}", input_path.display());
        let source = image::load_image(input_path)?;

        let padded = pad_image(&source, self.config.scale_factor)?;

        tracing::info!("Saving output to: {}", output_path.display());
        image::save_png(&padded, output_path)?;

        Ok(())
    }
}

/// Center `source` on a transparent canvas grown by `scale` per side.
///
/// The source is pasted using its own alpha as the mask, mixing all four
/// channels: opaque pixels are copied as-is, fully transparent pixels leave the
/// canvas transparent, and a partly transparent `(r, g, b, a)` lands on the
/// empty canvas as `(r·a, g·a, b·a, a·a) / 255`.
///
/// # Errors
///
/// Returns an error if `scale` is invalid or the padded canvas is too large.
pub fn pad_image(source: &RgbaCanvas, scale: f64) -> Result<RgbaCanvas> {
    Config {
        scale_factor: scale,
    }
    .validate()?;

    let (width, height) = source.dimensions();
    let layout = Layout::compute(width, height, scale)?;

    tracing::debug!(
        "Canvas {}x{} -> {}x{}, offset ({}, {})",
        width,
        height,
        layout.width,
        layout.height,
        layout.offset_x,
        layout.offset_y
    );

    let mut canvas = RgbaCanvas::from_pixel(layout.width, layout.height, TRANSPARENT);
    paste_masked(&mut canvas, source, layout.offset_x, layout.offset_y);

    Ok(canvas)
}

/// Paste `source` onto `canvas` at `(x, y)`, masked by the source's alpha.
///
/// Every channel of the destination, alpha included, moves towards the source
/// by `alpha / 255`. The caller guarantees `source` fits inside `canvas`.
fn paste_masked(canvas: &mut RgbaCanvas, source: &RgbaCanvas, x: u32, y: u32) {
    for (sx, sy, src) in source.enumerate_pixels() {
        let dst = canvas.get_pixel_mut(x + sx, y + sy);
        *dst = blend_masked(*dst, *src);
    }
}

fn blend_masked(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let mask = u32::from(src[3]);
    let mut out = dst;
    for (channel, (&d, &s)) in out.0.iter_mut().zip(dst.0.iter().zip(src.0.iter())) {
        *channel = div255(u32::from(d) * (255 - mask) + u32::from(s) * mask);
    }
    out
}

/// Rounded division by 255 for values up to `255 * 255`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn div255(value: u32) -> u8 {
    let tmp = value + 128;
    // Safe: value <= 65025, so the result is at most 255
    (((tmp >> 8) + tmp) >> 8) as u8
}
