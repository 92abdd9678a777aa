//! Error types for pageocr-engine

use pageocr_backend::BackendError;
use thiserror::Error;

/// Errors returned by [`OcrEngine`](crate::OcrEngine) operations
#[derive(Debug, Error)]
pub enum OcrError {
    /// The backend rejected the model data
    #[error("text recognition model failed to load: {0}")]
    ModelLoad(String),

    /// Image geometry does not describe its buffer
    #[error("invalid image: {0}")]
    InvalidImage(pageocr_core::Error),

    /// Operation needs an image but none is loaded
    #[error("no image loaded")]
    NoImage,

    /// Operation needs a text recognition model but none is loaded
    #[error("no text recognition model loaded")]
    NoModel,

    /// Backend has no such configuration variable
    #[error("unable to get variable {0}")]
    VariableNotFound(String),

    /// Backend rejected a configuration value
    #[error("unable to set variable {name} to '{value}'")]
    VariableSet { name: String, value: String },

    /// Engine configuration is invalid
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Layout analysis, recognition or output generation failed
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Result type for engine operations
pub type OcrResult<T> = Result<T, OcrError>;
