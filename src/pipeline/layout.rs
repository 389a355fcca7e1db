//! Canvas size and paste offset for a padded icon.

use crate::error::{Error, Result};

/// Computed geometry of a padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Horizontal position of the source image's left edge.
    pub offset_x: u32,
    /// Vertical position of the source image's top edge.
    pub offset_y: u32,
}

impl Layout {
    /// Compute the padded canvas for a `width` x `height` source.
    ///
    /// Each side becomes `floor(side * scale)` and the source is centered with
    /// `floor((new - old) / 2)`, so any odd leftover pixel ends up on the
    /// right/bottom margin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimensions`] if a padded side does not fit
    /// in a `u32`.
    pub fn compute(width: u32, height: u32, scale: f64) -> Result<Self> {
        let too_large = || Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("padded canvas at scale {scale} exceeds {}", u32::MAX),
        };

        let new_width = scaled(width, scale).ok_or_else(too_large)?;
        let new_height = scaled(height, scale).ok_or_else(too_large)?;

        Ok(Self {
            width: new_width,
            height: new_height,
            offset_x: new_width.saturating_sub(width) / 2,
            offset_y: new_height.saturating_sub(height) / 2,
        })
    }
}

/// `floor(side * scale)`, or `None` if it overflows `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(side: u32, scale: f64) -> Option<u32> {
    let value = (f64::from(side) * scale).floor();
    // Safe: range checked before casting
    (0.0..=f64::from(u32::MAX)).contains(&value).then(|| value as u32)
}
