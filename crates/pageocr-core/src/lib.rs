//! pageocr Core - Basic data structures for OCR orchestration
//!
//! This crate provides the value types shared by the backend interfaces and
//! the engine:
//!
//! - [`Image`] - Host-owned pixel buffer
//! - [`Rectangle`] / [`TextRegion`] / [`LayoutFlags`] - Extracted regions
//! - [`TextUnit`] - Region granularity
//! - [`Orientation`] - Estimated page rotation
//! - [`PageSegMode`] - Page segmentation mode

pub mod error;
pub mod image;
pub mod orientation;
pub mod psm;
pub mod region;

pub use error::{Error, Result};
pub use image::{Image, RGBA_BYTES_PER_PIXEL};
pub use orientation::Orientation;
pub use psm::PageSegMode;
pub use region::{LayoutFlags, Rectangle, TextRegion, TextUnit};
