//! Region extraction
//!
//! Converts the backend's page iterator into a flat `Vec<TextRegion>` at a
//! requested granularity. Regions come out in the backend's traversal
//! order, which is reading order for the analysed layout.

use pageocr_backend::{IteratorLevel, PageIterator, RecognitionBackend};
use pageocr_core::{LayoutFlags, TextRegion, TextUnit};

/// Backends report confidence as a percentage.
const CONFIDENCE_SCALE: f32 = 0.01;

/// Walks backend regions at one granularity.
#[derive(Debug, Clone, Copy)]
pub struct ResultExtractor {
    unit: TextUnit,
    with_text: bool,
}

impl ResultExtractor {
    /// Extract bounding boxes only.
    pub fn new(unit: TextUnit) -> Self {
        Self {
            unit,
            with_text: false,
        }
    }

    /// Also fill in text and confidence (requires recognition).
    pub fn with_text(mut self, with_text: bool) -> Self {
        self.with_text = with_text;
        self
    }

    /// Extract regions from the backend's current results.
    ///
    /// Returns an empty vec when the backend has nothing to iterate.
    pub fn extract<B: RecognitionBackend>(&self, backend: &mut B) -> Vec<TextRegion> {
        match backend.iterator() {
            Some(iter) => self.collect(iter),
            None => Vec::new(),
        }
    }

    /// Visit every region from the iterator's position to the end of the
    /// page.
    pub fn collect<I: PageIterator>(&self, mut iter: I) -> Vec<TextRegion> {
        let level = IteratorLevel::from(self.unit);
        let mut regions = Vec::new();
        loop {
            regions.push(self.region_at(&iter, level));
            if !iter.advance(level) {
                break;
            }
        }
        regions
    }

    /// Build the region at the iterator's position. An element without a
    /// bounding box keeps an empty rectangle.
    fn region_at<I: PageIterator>(&self, iter: &I, level: IteratorLevel) -> TextRegion {
        let mut region = TextRegion::new(iter.bounding_box(level).unwrap_or_default());

        if self.with_text {
            region.confidence = (iter.confidence(level) * CONFIDENCE_SCALE).clamp(0.0, 1.0);
            region.text = iter.text(level).unwrap_or_default();
        }

        if level.is_finer_than(IteratorLevel::TextLine) {
            if iter.is_at_beginning_of(IteratorLevel::TextLine) {
                region.flags |= LayoutFlags::START_OF_LINE;
            }
            if iter.is_at_final_element(IteratorLevel::TextLine, level) {
                region.flags |= LayoutFlags::END_OF_LINE;
            }
        }

        region
    }
}
