//! A Space Invaders clone drawn entirely on the CPU.
//!
//! Every frame is composed into a 224x256 [`PixelBuffer`] by the simulation
//! and handed to SDL2 as a single streaming texture. SDL2 is only used for the
//! window, vsync and keyboard events.
//!
//! # Quick Start
//!
//! ```ignore
//! use invaders::prelude::*;
//!
//! let mut window = Window::new("Space Invaders", WIDTH, HEIGHT, 2)?;
//! let mut buffer = PixelBuffer::new(WIDTH, HEIGHT);
//! let mut game = Game::new();
//! let mut input = InputState::new();
//! while input.running {
//!     game.render(&mut buffer);
//!     window.present(&buffer)?;
//!     game.update(&mut input);
//!     window.poll_events(&mut input);
//! }
//! ```

// Public API - exposed to library consumers
pub mod animation;
pub mod colors;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod rng;
pub mod sprites;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use game::{Game, GameState, HEIGHT, WIDTH};
pub use render::{PixelBuffer, Sprite, SpriteSheet};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use invaders::prelude::*;
/// ```
pub mod prelude {
    // Simulation
    pub use crate::entity::{Alien, AlienType, Bullet, Player};
    pub use crate::game::{Game, GameState, HEIGHT, WIDTH};

    // Rendering
    pub use crate::render::PixelBuffer;

    // Window & Input
    pub use crate::input::{InputState, Key};
    pub use crate::window::Window;
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{PixelBuffer, Sprite, SpriteSheet};
    pub use crate::sprites::{ALIENS, ALIEN_DEATH, DIGITS, GLYPHS, PLAYER};
}
