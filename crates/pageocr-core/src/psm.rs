//! Page segmentation modes
//!
//! Controls how the recognition backend partitions the page before
//! recognizing it. Ordinals are part of the host interface and must not be
//! renumbered.

use crate::error::{Error, Result};

/// Page segmentation mode (ordinal 0-13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum PageSegMode {
    /// Orientation and script detection only
    OsdOnly = 0,
    /// Automatic page segmentation with orientation and script detection
    AutoOsd = 1,
    /// Automatic page segmentation, no OSD or recognition
    AutoOnly = 2,
    /// Fully automatic page segmentation, no OSD
    Auto = 3,
    /// Single column of text of variable sizes
    SingleColumn = 4,
    /// Single uniform block of vertically aligned text
    SingleBlockVertText = 5,
    /// Single uniform block of text
    #[default]
    SingleBlock = 6,
    SingleLine = 7,
    SingleWord = 8,
    /// Single word in a circle
    CircleWord = 9,
    SingleChar = 10,
    /// As much text as possible in no particular order
    SparseText = 11,
    /// Sparse text with orientation and script detection
    SparseTextOsd = 12,
    /// Single text line, bypassing backend-specific hacks
    RawLine = 13,
}

impl PageSegMode {
    /// All modes in ordinal order.
    pub const ALL: [PageSegMode; 14] = [
        PageSegMode::OsdOnly,
        PageSegMode::AutoOsd,
        PageSegMode::AutoOnly,
        PageSegMode::Auto,
        PageSegMode::SingleColumn,
        PageSegMode::SingleBlockVertText,
        PageSegMode::SingleBlock,
        PageSegMode::SingleLine,
        PageSegMode::SingleWord,
        PageSegMode::CircleWord,
        PageSegMode::SingleChar,
        PageSegMode::SparseText,
        PageSegMode::SparseTextOsd,
        PageSegMode::RawLine,
    ];

    /// Create a mode from its ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPageSegMode`] if `value` is outside 0-13.
    pub fn from_ordinal(value: i32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::InvalidPageSegMode(value))
    }

    #[inline]
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_block() {
        assert_eq!(PageSegMode::default(), PageSegMode::SingleBlock);
        assert_eq!(PageSegMode::default().ordinal(), 6);
    }

    #[test]
    fn test_ordinals_match_table() {
        for (i, mode) in PageSegMode::ALL.iter().enumerate() {
            assert_eq!(mode.ordinal(), i as i32);
            assert_eq!(PageSegMode::from_ordinal(i as i32), Ok(*mode));
        }
    }

    #[test]
    fn test_out_of_range_ordinal() {
        assert_eq!(
            PageSegMode::from_ordinal(14),
            Err(Error::InvalidPageSegMode(14))
        );
        assert!(PageSegMode::from_ordinal(-1).is_err());
    }
}
