//! OcrEngine - lazy, cached OCR over one image at a time
//!
//! The engine owns a recognition backend and an image backend. Loading an
//! image is cheap; layout analysis and recognition are deferred until a
//! read operation needs them and then run at most once per loaded image.
//!
//! | Operation         | Needs image | Needs model | Runs                     |
//! |-------------------|-------------|-------------|--------------------------|
//! | `bounding_boxes`  | yes         | no          | layout analysis          |
//! | `text_boxes`      | yes         | yes         | recognition              |
//! | `text`            | yes         | yes         | recognition              |
//! | `hocr`            | yes         | yes         | recognition              |
//! | `orientation`     | yes         | no          | orientation detection    |
//!
//! All operations are synchronous. Recognition cannot be cancelled once
//! started.

use pageocr_backend::{ImageBackend, ProgressSink, RecognitionBackend};
use pageocr_core::{Image, Orientation, PageSegMode, TextRegion, TextUnit};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::extract::ResultExtractor;
use crate::hocr::hocr_document;
use crate::orient::{OrientationDetector, decide_orientation};
use crate::progress::ProgressMonitor;
use crate::state::{RecognitionState, StateEvent};
use crate::{OcrError, OcrResult};

/// Page whose hOCR fragment is requested from the backend.
const HOCR_PAGE: u32 = 0;

/// Synchronous OCR orchestrator.
///
/// # Examples
///
/// ```ignore
/// use pageocr_engine::OcrEngine;
/// use pageocr_core::{Image, PageSegMode, TextUnit};
/// use pageocr_backend::NoProgress;
///
/// let mut engine = OcrEngine::new(backend, image_backend);
/// engine.load_model(&model_bytes)?;
/// engine.load_image(&Image::new(640, 480), PageSegMode::default())?;
/// let words = engine.text_boxes(TextUnit::Word, &mut NoProgress)?;
/// ```
pub struct OcrEngine<R, I> {
    backend: R,
    image_backend: I,
    config: EngineConfig,
    state: RecognitionState,
    model_loaded: bool,
    image_loaded: bool,
}

impl<R, I> OcrEngine<R, I>
where
    R: RecognitionBackend,
    I: ImageBackend<Binary = R::Binary>,
{
    /// Create an engine with the default configuration.
    pub fn new(backend: R, image_backend: I) -> Self {
        Self {
            backend,
            image_backend,
            config: EngineConfig::default(),
            state: RecognitionState::Clean,
            model_loaded: false,
            image_loaded: false,
        }
    }

    /// Create an engine with a validated configuration.
    pub fn with_config(backend: R, image_backend: I, config: EngineConfig) -> OcrResult<Self> {
        config.validate()?;
        let mut engine = Self::new(backend, image_backend);
        engine.config = config;
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the recognition backend.
    pub fn backend(&self) -> &R {
        &self.backend
    }

    /// Get the image backend.
    pub fn image_backend(&self) -> &I {
        &self.image_backend
    }

    /// Get how much work has been cached for the current image.
    pub fn state(&self) -> RecognitionState {
        self.state
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model_loaded
    }

    pub fn is_image_loaded(&self) -> bool {
        self.image_loaded
    }

    /// Backend version identifier.
    pub fn version(&self) -> String {
        self.backend.version()
    }

    /// Load a trained text recognition model.
    ///
    /// Configured variables are applied after the backend accepts the model.
    /// A variable the backend rejects is logged and skipped; it does not
    /// fail the load. The engine can be reused for any number of images
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::ModelLoad`] if the backend rejects the data. The
    /// engine keeps its previous model state in that case.
    pub fn load_model(&mut self, model: &[u8]) -> OcrResult<()> {
        self.backend
            .init(model, &self.config.language, self.config.engine_mode)
            .map_err(|e| OcrError::ModelLoad(e.to_string()))?;
        self.model_loaded = true;
        debug!(
            language = %self.config.language,
            bytes = model.len(),
            version = %self.backend.version(),
            "model loaded"
        );

        for (name, value) in &self.config.variables {
            if let Err(e) = self.backend.set_variable(name, value) {
                warn!(%name, %value, error = %e, "configured variable rejected");
            }
        }
        Ok(())
    }

    /// Load an image for subsequent operations.
    ///
    /// Cheap: expensive processing is deferred until results are requested.
    /// Any cached layout or recognition results for a previous image are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::InvalidImage`] if the buffer is shorter than
    /// `height * bytes_per_line` or a dimension is zero. Nothing is changed
    /// in that case.
    pub fn load_image(&mut self, image: &Image, mode: PageSegMode) -> OcrResult<()> {
        image.validate().map_err(OcrError::InvalidImage)?;
        let invalid_dimension = || {
            OcrError::InvalidImage(pageocr_core::Error::InvalidDimension {
                width: image.width(),
                height: image.height(),
            })
        };
        let width = i32::try_from(image.width()).map_err(|_| invalid_dimension())?;
        let height = i32::try_from(image.height()).map_err(|_| invalid_dimension())?;

        // Free the previous image before the backend copies the new one
        self.backend.clear();
        self.backend.set_page_seg_mode(mode);
        self.backend.set_image(image);
        self.backend.set_rectangle(0, 0, width, height);

        self.image_loaded = true;
        self.state = self.state.transition(StateEvent::Reset);
        debug!(width, height, ?mode, "image loaded");
        Ok(())
    }

    /// Load an image using the configured page segmentation mode.
    pub fn load_image_default(&mut self, image: &Image) -> OcrResult<()> {
        self.load_image(image, self.config.page_seg_mode)
    }

    /// Clear the current image and its results, keeping the model loaded.
    pub fn clear_image(&mut self) {
        self.backend.clear();
        self.image_loaded = false;
        self.state = self.state.transition(StateEvent::Reset);
        debug!("image cleared");
    }

    /// Get bounding boxes for a unit of text, running layout analysis if
    /// not already done.
    ///
    /// Much cheaper than recognition and works without a model. Word
    /// boundaries may differ from [`text_boxes`](Self::text_boxes) until
    /// recognition has run; afterwards both agree.
    pub fn bounding_boxes(&mut self, unit: TextUnit) -> OcrResult<Vec<TextRegion>> {
        self.require_image()?;
        self.ensure_layout()?;
        let regions = ResultExtractor::new(unit).extract(&mut self.backend);
        debug!(%unit, count = regions.len(), "extracted bounding boxes");
        Ok(regions)
    }

    /// Get bounding boxes, text and confidence for a unit of text, running
    /// recognition if not already done.
    pub fn text_boxes(
        &mut self,
        unit: TextUnit,
        progress: &mut dyn ProgressSink,
    ) -> OcrResult<Vec<TextRegion>> {
        self.require_image()?;
        self.require_model()?;
        self.ensure_recognized(progress)?;
        let regions = ResultExtractor::new(unit)
            .with_text(true)
            .extract(&mut self.backend);
        debug!(%unit, count = regions.len(), "extracted text boxes");
        Ok(regions)
    }

    /// Get the page text, running recognition if not already done.
    pub fn text(&mut self, progress: &mut dyn ProgressSink) -> OcrResult<String> {
        self.require_image()?;
        self.require_model()?;
        self.ensure_recognized(progress)?;
        Ok(self.backend.utf8_text()?)
    }

    /// Get the page as an hOCR document, running recognition if not
    /// already done.
    pub fn hocr(&mut self, progress: &mut dyn ProgressSink) -> OcrResult<String> {
        self.require_image()?;
        self.require_model()?;
        self.ensure_recognized(progress)?;
        let body = self.backend.hocr_text(HOCR_PAGE)?;
        Ok(hocr_document(&self.backend.version(), &body))
    }

    /// Estimate the page rotation.
    ///
    /// Independent of cached layout/recognition results. Detection failures
    /// are not errors; they yield [`Orientation::UNKNOWN`].
    pub fn orientation(&mut self) -> OcrResult<Orientation> {
        self.require_image()?;
        let Some(binary) = self.backend.thresholded_image() else {
            warn!("no thresholded image available, orientation unknown");
            return Ok(Orientation::UNKNOWN);
        };

        let detector = OrientationDetector::new(&self.image_backend);
        let signal = detector.detect(&binary);
        drop(binary);

        if let Err(e) = &signal {
            warn!(error = %e, "orientation detection failed");
        }
        let orientation = decide_orientation(signal);
        debug!(
            rotation = orientation.rotation,
            confidence = orientation.confidence,
            "orientation"
        );
        Ok(orientation)
    }

    /// Get the value of a backend configuration variable.
    pub fn variable(&self, name: &str) -> OcrResult<String> {
        self.backend
            .variable(name)
            .ok_or_else(|| OcrError::VariableNotFound(name.to_string()))
    }

    /// Set a backend configuration variable.
    pub fn set_variable(&mut self, name: &str, value: &str) -> OcrResult<()> {
        self.backend
            .set_variable(name, value)
            .map_err(|_| OcrError::VariableSet {
                name: name.to_string(),
                value: value.to_string(),
            })
    }

    fn require_image(&self) -> OcrResult<()> {
        if self.image_loaded {
            Ok(())
        } else {
            Err(OcrError::NoImage)
        }
    }

    fn require_model(&self) -> OcrResult<()> {
        if self.model_loaded {
            Ok(())
        } else {
            Err(OcrError::NoModel)
        }
    }

    fn ensure_layout(&mut self) -> OcrResult<()> {
        if self.state.layout_done() {
            debug!(state = ?self.state, "layout analysis cached");
            return Ok(());
        }
        self.backend.analyse_layout()?;
        self.state = self.state.transition(StateEvent::LayoutAnalysed);
        debug!("layout analysis done");
        Ok(())
    }

    fn ensure_recognized(&mut self, progress: &mut dyn ProgressSink) -> OcrResult<()> {
        let mut monitor = ProgressMonitor::new(progress);
        if self.state.ocr_done() {
            debug!("recognition cached");
        } else {
            self.backend.recognize(&mut monitor)?;
            self.state = self.state.transition(StateEvent::Recognized);
            debug!("recognition done");
        }
        monitor.finish();
        Ok(())
    }
}
