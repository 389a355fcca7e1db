//! # `iconpad`
//!
//! Adds a transparent margin around an app icon so that launcher masks and
//! adaptive-icon safe zones do not clip the artwork.
//!
//! The canvas grows by a fixed factor of 1.4 per side and the original image is
//! pasted, unscaled, in the center. The result is always written as PNG.
//!
//! ## Example
//!
//! ```no_run
//! use iconpad::{Config, Padder};
//!
//! # fn main() -> iconpad::Result<()> {
//! let padder = Padder::new(Config::default())?;
//!
//! padder.process("assets/icon.png", "assets/icon.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{pad_image, Config, Layout, Padder};
