//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// The raster graphics capability is missing or unusable
    #[error("Graphics capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// Drawing the letter glyph failed
    #[error("Glyph rendering failed: {0}")]
    GlyphRender(String),

    /// A candidate font file could not be read or parsed
    #[error("Failed to load font: {0}")]
    FontLoad(String),

    /// Icons are square and must be at least one pixel wide
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    /// Filesystem error while writing an icon
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding error from the imaging backend
    #[cfg(feature = "raster")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
