//! Region iteration over an analysed page
//!
//! A [`PageIterator`] walks the backend's page hierarchy in reading order.
//! The iterator is always positioned on one element at every level; asking
//! about a coarser level describes the element containing the current one.

use pageocr_core::{Rectangle, TextUnit};

/// Level of the page hierarchy, coarsest first.
///
/// The ordering is meaningful: `a < b` means `a` is coarser than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IteratorLevel {
    Block,
    Para,
    TextLine,
    Word,
    /// Finest level; the default iteration granularity
    #[default]
    Symbol,
}

impl IteratorLevel {
    /// Check if this level is strictly finer than `other`.
    #[inline]
    pub fn is_finer_than(self, other: IteratorLevel) -> bool {
        self > other
    }
}

impl From<TextUnit> for IteratorLevel {
    fn from(unit: TextUnit) -> Self {
        match unit {
            TextUnit::Word => IteratorLevel::Word,
            TextUnit::Line => IteratorLevel::TextLine,
        }
    }
}

/// Cursor over the regions of an analysed page.
pub trait PageIterator {
    /// Bounding box of the element at `level`, or `None` if the element
    /// has no extent.
    fn bounding_box(&self, level: IteratorLevel) -> Option<Rectangle>;

    /// Recognition confidence of the element at `level` as a percentage.
    fn confidence(&self, level: IteratorLevel) -> f32;

    /// UTF-8 text of the element at `level`, or `None` before recognition.
    fn text(&self, level: IteratorLevel) -> Option<String>;

    /// Check if the current position starts a new element at `level`.
    fn is_at_beginning_of(&self, level: IteratorLevel) -> bool;

    /// Check if the current `element` is the last one inside the enclosing
    /// `level` element.
    fn is_at_final_element(&self, level: IteratorLevel, element: IteratorLevel) -> bool;

    /// Move to the start of the next element at `level`.
    ///
    /// Returns `false` once the page is exhausted.
    fn advance(&mut self, level: IteratorLevel) -> bool;
}
