//! pageocr-test - Regression test framework for pageocr
//!
//! Provides the [`RegParams`] check recorder used by every `*_reg` test,
//! plus scripted backends that stand in for a real recognition service:
//!
//! - [`MockBackend`]: serves a [`MockPage`] through `RecognitionBackend`,
//!   counting layout and recognition calls
//! - [`MockImageBackend`]: returns a fixed orientation signal
//! - [`ProgressRecorder`]: captures progress notifications
//!
//! # Usage
//!
//! ```ignore
//! use pageocr_test::RegParams;
//!
//! let mut rp = RegParams::new("extract");
//! rp.compare_values(3.0, regions.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_LOG`: engine log level ("off", "error", "warn", "info",
//!   "debug", "trace"); defaults to "warn"

mod mock;
mod params;
mod progress;

pub use mock::{
    MOCK_MODEL, MOCK_VERSION, MockBackend, MockBinary, MockImageBackend, MockIterator, MockPage,
    MockWord,
};
pub use params::{RegParams, init_tracing, log_level_from_env};
pub use progress::ProgressRecorder;

use pageocr_core::Image;

/// Lines served by [`sample_page`].
pub const SAMPLE_LINES: [&str; 2] = ["The quick brown fox", "jumps over the lazy dog"];

/// Width of [`sample_image`] in pixels
pub const SAMPLE_WIDTH: u32 = 320;
/// Height of [`sample_image`] in pixels
pub const SAMPLE_HEIGHT: u32 = 120;

/// White RGBA page large enough to hold [`sample_page`].
pub fn sample_image() -> Image {
    let mut image = Image::new(SAMPLE_WIDTH, SAMPLE_HEIGHT);
    image.data_mut().fill(255);
    image
}

/// Two-line page of nine words.
pub fn sample_page() -> MockPage {
    MockPage::from_lines(&SAMPLE_LINES)
}
