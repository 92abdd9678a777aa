//! Cached recognition state
//!
//! Tracks how much work the backend has already done for the current image
//! so that layout analysis and recognition each run at most once per image
//! load.
//!
//! ```text
//!            LayoutAnalysed            Recognized
//!   Clean ------------------> LayoutAnalyzed ------------> Recognized
//!     |                                                        ^
//!     +-------------------------- Recognized ------------------+
//!
//!   Reset returns any state to Clean.
//! ```

/// How far processing of the current image has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecognitionState {
    /// Nothing computed since the last image load or clear
    #[default]
    Clean,
    /// Layout analysis done, no recognition
    LayoutAnalyzed,
    /// Recognition done (layout analysis is implied)
    Recognized,
}

/// Events that move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateEvent {
    /// Layout analysis completed
    LayoutAnalysed,
    /// Recognition completed
    Recognized,
    /// Image loaded or cleared
    Reset,
}

impl RecognitionState {
    /// Apply `event` and return the next state.
    pub fn transition(self, event: StateEvent) -> Self {
        use RecognitionState::*;
        match (self, event) {
            (_, StateEvent::Reset) => Clean,
            (Clean, StateEvent::LayoutAnalysed) => LayoutAnalyzed,
            (LayoutAnalyzed, StateEvent::LayoutAnalysed) => LayoutAnalyzed,
            // Re-running layout analysis never discards recognition results
            (Recognized, StateEvent::LayoutAnalysed) => Recognized,
            (_, StateEvent::Recognized) => Recognized,
        }
    }

    /// Check if layout analysis results are available.
    #[inline]
    pub fn layout_done(self) -> bool {
        !matches!(self, RecognitionState::Clean)
    }

    /// Check if recognition results are available.
    #[inline]
    pub fn ocr_done(self) -> bool {
        matches!(self, RecognitionState::Recognized)
    }
}
