//! Error type for the presentation layer.
//!
//! The simulation itself cannot fail; everything here is a startup or
//! per-frame failure of the windowing backend, and none of it is recoverable.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// SDL or one of its subsystems failed to initialize.
    Init(String),
    /// The window or its renderer could not be created.
    Window(String),
    /// Creating or updating the streaming texture failed.
    Texture(String),
    /// Copying the texture to the screen failed.
    Present(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Init(msg) => write!(f, "failed to initialize SDL: {msg}"),
            Error::Window(msg) => write!(f, "failed to create window: {msg}"),
            Error::Texture(msg) => write!(f, "texture error: {msg}"),
            Error::Present(msg) => write!(f, "failed to present frame: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let err = Error::Window("no display".to_string());
        assert_eq!(err.to_string(), "failed to create window: no display");
    }
}
