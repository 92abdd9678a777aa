//! Recognition backend interface

use pageocr_core::{Image, PageSegMode};

use crate::BackendResult;
use crate::iterator::PageIterator;
use crate::progress::ProgressSink;

/// Recognition engine mode requested at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum EngineMode {
    /// Legacy character classifier only
    LegacyOnly = 0,
    /// Neural line recognizer only
    LstmOnly = 1,
    /// Both recognizers combined
    Combined = 2,
    /// Whatever the model supports
    #[default]
    Default = 3,
}

/// An OCR engine consumed as an opaque service.
///
/// The backend copies image data on [`set_image`](Self::set_image) and keeps
/// layout/recognition results until the next image is set or
/// [`clear`](Self::clear) is called. Callers are responsible for deciding
/// when analysis needs to run again.
pub trait RecognitionBackend {
    /// Region iterator borrowing the backend's results.
    type Iter<'a>: PageIterator
    where
        Self: 'a;

    /// Thresholded image handle; dropping it releases the image.
    type Binary;

    /// Initialize from in-memory model data.
    ///
    /// On error the backend must keep any previously loaded model, its
    /// variables and the current image usable, exactly as before the call.
    fn init(&mut self, model: &[u8], language: &str, mode: EngineMode) -> BackendResult<()>;

    /// Backend version identifier.
    fn version(&self) -> String;

    fn set_page_seg_mode(&mut self, mode: PageSegMode);

    /// Copy the pixels of `image` into the backend.
    fn set_image(&mut self, image: &Image);

    /// Restrict processing to a sub-rectangle of the current image.
    fn set_rectangle(&mut self, left: i32, top: i32, width: i32, height: i32);

    /// Release the current image and any results derived from it.
    fn clear(&mut self);

    /// Run page layout analysis without recognition.
    fn analyse_layout(&mut self) -> BackendResult<()>;

    /// Run full recognition, reporting progress to `monitor`.
    ///
    /// The backend may stop reporting before 100%.
    fn recognize(&mut self, monitor: &mut dyn ProgressSink) -> BackendResult<()>;

    /// Iterator positioned at the first region, or `None` if there is
    /// nothing to iterate.
    fn iterator(&mut self) -> Option<Self::Iter<'_>>;

    /// Whole-page text.
    fn utf8_text(&mut self) -> BackendResult<String>;

    /// hOCR fragment for the page numbered `page` (0-based).
    fn hocr_text(&mut self, page: u32) -> BackendResult<String>;

    /// Binarized copy of the current image, or `None` if no image is set.
    fn thresholded_image(&mut self) -> Option<Self::Binary>;

    /// Current value of a configuration variable.
    fn variable(&self, name: &str) -> Option<String>;

    fn set_variable(&mut self, name: &str, value: &str) -> BackendResult<()>;
}
