//! Image backend: orientation signals over a thresholded page

use crate::BackendResult;

/// Raw orientation evidence for a page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientSignal {
    /// Confidence that text is rightside-up (positive = up, negative = down)
    pub up_confidence: f32,
    /// Confidence for left orientation (positive = left, negative = right)
    pub left_confidence: f32,
}

/// Image processing service used for orientation detection.
pub trait ImageBackend {
    /// Thresholded (binary) image handle accepted by this backend.
    type Binary;

    /// Compute up/down and left/right confidences for `image`.
    ///
    /// `min_count` is the minimum evidence count; 0 selects the backend
    /// default.
    fn orient_detect(&self, image: &Self::Binary, min_count: u32) -> BackendResult<OrientSignal>;
}
