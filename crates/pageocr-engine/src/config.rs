//! Engine configuration

use pageocr_backend::EngineMode;
use pageocr_core::PageSegMode;

use crate::{OcrError, OcrResult};

/// Language identifier passed to the backend on model load.
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Options for [`OcrEngine`](crate::OcrEngine)
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Language identifier for model initialization (default: "eng")
    pub language: String,
    /// Recognition mode for model initialization (default: `EngineMode::Default`)
    pub engine_mode: EngineMode,
    /// Mode used by `load_image_default` (default: `SingleBlock`)
    pub page_seg_mode: PageSegMode,
    /// Backend variables applied after each successful model load
    pub variables: Vec<(String, String)>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            engine_mode: EngineMode::Default,
            page_seg_mode: PageSegMode::SingleBlock,
            variables: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_engine_mode(mut self, mode: EngineMode) -> Self {
        self.engine_mode = mode;
        self
    }

    pub fn with_page_seg_mode(mut self, mode: PageSegMode) -> Self {
        self.page_seg_mode = mode;
        self
    }

    /// Add a variable to set after model load
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    /// Validate options
    pub fn validate(&self) -> OcrResult<()> {
        if self.language.trim().is_empty() {
            return Err(OcrError::Config("language must not be empty".to_string()));
        }
        if self.variables.iter().any(|(name, _)| name.is_empty()) {
            return Err(OcrError::Config(
                "variable name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
