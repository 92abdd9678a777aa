//! Error types for pageocr-backend

use thiserror::Error;

/// Failures reported by a recognition or image backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Model data was rejected during initialization
    #[error("initialization failed: {0}")]
    InitFailed(String),

    /// The backend has no image to work on
    #[error("no image set")]
    NoImage,

    /// Layout analysis failed
    #[error("layout analysis failed: {0}")]
    LayoutFailed(String),

    /// Recognition failed
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),

    /// Text or markup could not be produced
    #[error("text unavailable: {0}")]
    TextUnavailable(String),

    /// A configuration value was rejected
    #[error("variable '{name}' rejected value '{value}'")]
    VariableRejected { name: String, value: String },

    /// Orientation signal could not be computed
    #[error("orientation detection failed: {0}")]
    OrientationFailed(String),
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
