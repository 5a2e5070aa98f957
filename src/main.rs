use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use invaders::prelude::*;
use invaders::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let mut window = Window::new(&config.title, WIDTH, HEIGHT, config.scale)
        .context("could not open the game window")?;
    let mut buffer = PixelBuffer::new(WIDTH, HEIGHT);
    let mut game = Game::new();
    let mut input = InputState::new();

    tracing::info!(title = %config.title, "starting");

    while input.running {
        // Render
        game.render(&mut buffer);
        window.present(&buffer).context("frame presentation failed")?;

        // Update
        game.update(&mut input);

        // Process input
        window.poll_events(&mut input);
    }

    tracing::info!(score = game.score(), "exiting");
    Ok(())
}
