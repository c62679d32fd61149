//! Unified error type for skinface.

use thiserror::Error;

/// Errors that can occur while serving or rendering an avatar.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// The skin API answered with a non-200 status.
    #[error("Failed to download skin")]
    Download {
        /// HTTP status code returned by the upstream.
        status: u16,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The downloaded body is not a decodable image.
    #[error("Failed to decode skin: {0}")]
    Decode(#[from] image::ImageError),

    /// The skin is too small for one of the fixed crop windows.
    #[error("Skin is {width}x{height}, too small for the {region} region {x0},{y0}-{x1},{y1}")]
    Geometry {
        /// Name of the region being cropped.
        region: &'static str,
        /// Skin width.
        width: u32,
        /// Skin height.
        height: u32,
        /// Left edge of the window.
        x0: u32,
        /// Top edge of the window.
        y0: u32,
        /// Right edge of the window (exclusive).
        x1: u32,
        /// Bottom edge of the window (exclusive).
        y1: u32,
    },

    /// PNG encoding of the final avatar failed.
    #[error("Failed to encode avatar: {0}")]
    Encode(String),

    /// A replayed interaction recorded an error, or the cassette ran out.
    #[error("{0}")]
    Replay(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
