//! Error types for the toolkit

use thiserror::Error;

/// Result type alias for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the toolkit
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create the icon output directory
    #[error("Failed to create output directory: {0}")]
    DirCreate(String),

    /// Failed to encode or write an icon image
    #[error("Failed to write image: {0}")]
    ImageWrite(String),

    /// Failed to write the manifest fragment
    #[error("Failed to write manifest: {0}")]
    ManifestWrite(String),

    /// Caption text contains a character outside the built-in font
    #[error("No glyph for character {0:?}")]
    UnsupportedGlyph(char),

    /// The requested port is already bound by another process
    #[error("Port {0} is already in use")]
    PortInUse(u16),

    /// Failed to bind the listener
    #[error("Failed to bind server: {0}")]
    Bind(String),
}
