//! Error types for deck parsing and theme configuration.
//!
//! Rendering itself never fails; these errors only surface at the input
//! boundary, before a deck reaches the renderer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading decks or themes.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read an input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The input is not a structurally valid deck or theme record.
    #[error("Invalid JSON input: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The deck parsed but violates a deck invariant.
    #[error("Invalid deck description: {0}")]
    InvalidDeck(String),

    /// No built-in theme has the requested name.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
