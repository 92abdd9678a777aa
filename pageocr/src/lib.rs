//! pageocr - OCR orchestration for Rust
//!
//! Drives a text recognition backend over one image at a time, caching
//! layout analysis and recognition so that repeated queries stay cheap.
//!
//! # Overview
//!
//! - Load a trained model once, then any number of images
//! - Word and line bounding boxes from layout analysis alone
//! - Word and line text with confidences from full recognition
//! - Plain text and hOCR output
//! - Page orientation estimation
//! - Synchronous progress reporting
//!
//! Recognition and image processing are supplied by implementations of
//! [`backend::RecognitionBackend`] and [`backend::ImageBackend`].
//!
//! # Example
//!
//! ```
//! use pageocr::{Image, PageSegMode, Rectangle, TextUnit};
//!
//! // A blank 640x480 RGBA page
//! let image = Image::new(640, 480);
//! assert!(image.validate().is_ok());
//! assert_eq!(image.bytes_per_line(), 640 * 4);
//!
//! let rect = Rectangle::from_corners(10, 10, 50, 30);
//! assert!(rect.is_within(image.width(), image.height()));
//! assert_eq!("line".parse::<TextUnit>(), Ok(TextUnit::Line));
//! assert_eq!(PageSegMode::default(), PageSegMode::SingleBlock);
//! ```

// Re-export core types (value types used everywhere)
pub use pageocr_core::*;

// Orchestrator entry points
pub use pageocr_engine::{EngineConfig, OcrEngine, OcrError, OcrResult};

// Re-export lower crates as modules to avoid name conflicts
pub use pageocr_backend as backend;
pub use pageocr_engine as engine;
