//! Software rendering primitives.
//!
//! Everything the game draws goes through a [`PixelBuffer`]; the window only
//! ever sees the finished raster.

mod pixel_buffer;
mod sprite;

pub use pixel_buffer::PixelBuffer;
pub use sprite::{Sprite, SpriteSheet};
