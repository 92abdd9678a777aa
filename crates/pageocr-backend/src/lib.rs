//! pageocr-backend - Interfaces to the services the engine orchestrates
//!
//! The engine never performs recognition or image processing itself. It
//! talks to two services through the traits defined here:
//!
//! - [`RecognitionBackend`]: model loading, layout analysis, recognition,
//!   text and markup output, configuration variables
//! - [`ImageBackend`]: orientation evidence over a thresholded image
//!
//! # Modules
//!
//! - [`iterator`]: [`PageIterator`] and [`IteratorLevel`]
//! - [`progress`]: [`ProgressSink`] capability
//! - [`orient`]: [`ImageBackend`] and [`OrientSignal`]
//! - [`recognition`]: [`RecognitionBackend`] and [`EngineMode`]

mod error;
pub mod iterator;
pub mod orient;
pub mod progress;
pub mod recognition;

pub use error::{BackendError, BackendResult};
pub use iterator::{IteratorLevel, PageIterator};
pub use orient::{ImageBackend, OrientSignal};
pub use progress::{NoProgress, ProgressSink};
pub use recognition::{EngineMode, RecognitionBackend};

// Re-export core for convenience
pub use pageocr_core;
