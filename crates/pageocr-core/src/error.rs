//! Error types for pageocr-core
//!
//! Covers validation of images and of values parsed from host input.
//! Backend and engine failures live in their own crates and wrap this type.

use thiserror::Error;

/// pageocr-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer is shorter than `height * bytes_per_line`
    #[error("image buffer too short: need {required} bytes, got {actual}")]
    BufferTooShort { required: usize, actual: usize },

    /// Row stride cannot hold a full row of pixels
    #[error("invalid row stride: {bytes_per_line} bytes per line for width {width} at {bytes_per_pixel} bytes per pixel")]
    InvalidStride {
        width: u32,
        bytes_per_pixel: u32,
        bytes_per_line: u32,
    },

    /// Unsupported bytes per pixel
    #[error("unsupported bytes per pixel: {0}")]
    UnsupportedPixelSize(u32),

    /// Unknown text unit name
    #[error("invalid text unit: {0}")]
    InvalidTextUnit(String),

    /// Page segmentation mode ordinal out of range
    #[error("invalid page segmentation mode: {0}")]
    InvalidPageSegMode(i32),
}

/// Result type alias for pageocr-core operations
pub type Result<T> = std::result::Result<T, Error>;
