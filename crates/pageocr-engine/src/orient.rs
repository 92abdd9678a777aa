//! Orientation detection
//!
//! The image backend measures ascender/descender evidence in a thresholded
//! copy of the page and returns two signed confidences. This module turns
//! them into a rotation in 90 degree steps.
//!
//! This works best for non-uppercase Latin text and will likely perform
//! badly for other scripts or all-uppercase pages.

use pageocr_backend::{BackendResult, ImageBackend, OrientSignal};
use pageocr_core::Orientation;

/// Minimum `|up| - |left|` margin for trusting the up/down signal.
pub const UP_DOWN_MARGIN: f32 = 5.0;

/// Minimum evidence count passed to the backend; 0 selects its default.
const MIN_COUNT: u32 = 0;

/// Runs the image backend's orientation primitive.
#[derive(Debug)]
pub struct OrientationDetector<'a, I> {
    backend: &'a I,
}

impl<'a, I: ImageBackend> OrientationDetector<'a, I> {
    pub fn new(backend: &'a I) -> Self {
        Self { backend }
    }

    /// Compute orientation evidence for a thresholded image.
    ///
    /// The image stays owned by the caller.
    pub fn detect(&self, image: &I::Binary) -> BackendResult<OrientSignal> {
        self.backend.orient_detect(image, MIN_COUNT)
    }
}

/// Map raw orientation evidence to a rotation.
///
/// Backend errors yield [`Orientation::UNKNOWN`].
pub fn decide_orientation(signal: BackendResult<OrientSignal>) -> Orientation {
    let Ok(OrientSignal {
        up_confidence: up,
        left_confidence: left,
    }) = signal
    else {
        return Orientation::UNKNOWN;
    };

    if up.abs() - left.abs() > UP_DOWN_MARGIN {
        Orientation::certain(if up > 0.0 { 0 } else { 180 })
    } else {
        Orientation::certain(if left < 0.0 { 90 } else { 270 })
    }
}
