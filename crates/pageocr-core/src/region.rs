//! Rectangle, TextRegion - items produced by region extraction
//!
//! Regions are reported in backend reading order. Each carries a bounding
//! rectangle and, when recognition has been run, the recognized text and a
//! confidence score.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::Error;

/// An axis-aligned rectangle in image coordinates.
///
/// Unlike a width/height box, both corners are stored, matching how
/// recognition backends report region bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rectangle {
    /// Create a rectangle from two corner points, normalizing their order.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Check the `left <= right` and `top <= bottom` invariant.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Check if this rectangle lies within a `width` x `height` image.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.is_valid()
            && self.left >= 0
            && self.top >= 0
            && i64::from(self.right) <= i64::from(width)
            && i64::from(self.bottom) <= i64::from(height)
    }
}

/// Position of a region within its text line.
///
/// Only set when regions are finer than lines; always empty for
/// [`TextUnit::Line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutFlags(u32);

impl LayoutFlags {
    pub const NONE: LayoutFlags = LayoutFlags(0);
    /// First region of a text line
    pub const START_OF_LINE: LayoutFlags = LayoutFlags(1);
    /// Last region of a text line
    pub const END_OF_LINE: LayoutFlags = LayoutFlags(2);

    /// Get the raw bit value.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Build flags from raw bits, dropping unknown bits.
    #[inline]
    pub fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & (Self::START_OF_LINE.0 | Self::END_OF_LINE.0))
    }

    #[inline]
    pub fn contains(self, other: LayoutFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LayoutFlags {
    type Output = LayoutFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        LayoutFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayoutFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Granularity at which text regions are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextUnit {
    Word,
    Line,
}

impl TextUnit {
    /// Get the lowercase name used by hosts.
    pub fn as_str(self) -> &'static str {
        match self {
            TextUnit::Word => "word",
            TextUnit::Line => "line",
        }
    }
}

impl fmt::Display for TextUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "word" => Ok(TextUnit::Word),
            "line" => Ok(TextUnit::Line),
            _ => Err(Error::InvalidTextUnit(s.to_string())),
        }
    }
}

/// A region of text found by layout analysis or recognition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRegion {
    pub rect: Rectangle,
    pub flags: LayoutFlags,
    /// Recognition confidence in [0, 1]; 0 when text was not requested
    pub confidence: f32,
    /// Recognized UTF-8 text; empty when text was not requested
    pub text: String,
}

impl TextRegion {
    /// Create a region carrying only a bounding rectangle.
    pub fn new(rect: Rectangle) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    #[inline]
    pub fn starts_line(&self) -> bool {
        self.flags.contains(LayoutFlags::START_OF_LINE)
    }

    #[inline]
    pub fn ends_line(&self) -> bool {
        self.flags.contains(LayoutFlags::END_OF_LINE)
    }
}
