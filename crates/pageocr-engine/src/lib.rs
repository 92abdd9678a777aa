//! pageocr-engine - OCR orchestration
//!
//! This crate drives a [`RecognitionBackend`](pageocr_backend::RecognitionBackend)
//! and an [`ImageBackend`](pageocr_backend::ImageBackend):
//!
//! - **Caching**: layout analysis and recognition run at most once per
//!   loaded image ([`RecognitionState`])
//! - **Extraction**: backend regions become ordered [`TextRegion`]s at word
//!   or line granularity ([`ResultExtractor`])
//! - **Progress**: backend progress is relayed to the caller with a
//!   guaranteed final 100% ([`ProgressMonitor`])
//! - **Orientation**: page rotation estimated from backend evidence
//!   ([`OrientationDetector`])
//! - **hOCR**: page markup wrapped in an XHTML document ([`hocr`])
//!
//! # Modules
//!
//! - [`engine`]: [`OcrEngine`] orchestrator
//! - [`config`]: [`EngineConfig`] options
//! - [`state`]: cached recognition state machine
//!
//! [`TextRegion`]: pageocr_core::TextRegion

pub mod config;
pub mod engine;
mod error;
pub mod extract;
pub mod hocr;
pub mod orient;
pub mod progress;
pub mod state;

pub use config::{DEFAULT_LANGUAGE, EngineConfig};
pub use engine::OcrEngine;
pub use error::{OcrError, OcrResult};
pub use extract::ResultExtractor;
pub use hocr::hocr_document;
pub use orient::{OrientationDetector, UP_DOWN_MARGIN, decide_orientation};
pub use progress::{PROGRESS_COMPLETE, ProgressMonitor};
pub use state::{RecognitionState, StateEvent};

// Re-export lower crates for convenience
pub use pageocr_backend;
pub use pageocr_core;
