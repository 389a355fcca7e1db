//! Icon padding pipeline.

mod layout;
mod padding;

pub use layout::Layout;
pub use padding::{pad_image, Config, Padder, DEFAULT_SCALE_FACTOR};
