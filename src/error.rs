//! Error types for nfoview.
//!
//! Only the boundary can fail: reading bytes, acquiring a drawing surface,
//! loading a font, encoding a PNG. Decoding, document building and glyph
//! classification are total and never produce an [`Error`].

use std::io;
use std::path::PathBuf;

/// Result type alias for nfoview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for nfoview operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The byte supplier could not read the requested file.
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The platform capability needed for an operation is not present.
    #[error("{0} is not available on this platform")]
    CapabilityUnavailable(&'static str),
    /// A drawing surface of the requested size could not be allocated.
    #[error("cannot allocate a {width}x{height} export surface")]
    ExportSurfaceUnavailable { width: u32, height: u32 },
    /// Font data could not be parsed.
    #[error("invalid font: {0}")]
    InvalidFont(String),
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    /// I/O error while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error came from the input side (no document produced).
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::InputUnavailable { .. } | Self::CapabilityUnavailable(_)
        )
    }
}
