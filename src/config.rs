//! Command-line options.
//!
//! Gameplay is fixed; only the presentation can be tuned.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "invaders", version, about = "Space Invaders on a software-rendered framebuffer")]
pub struct Config {
    /// Window title
    #[arg(long, default_value = "Space Invaders")]
    pub title: String,

    /// Integer scale factor from playfield pixels to window pixels
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,
}
