//! Progress reporting capability
//!
//! Recognition reports progress synchronously through a [`ProgressSink`]
//! passed in by the caller. Sinks cannot cancel recognition.

/// Receives recognition progress as a percentage in 0-100.
pub trait ProgressSink {
    fn progress(&mut self, percent: u8);
}

impl<F> ProgressSink for F
where
    F: FnMut(u8),
{
    fn progress(&mut self, percent: u8) {
        self(percent)
    }
}

/// Sink that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _percent: u8) {}
}
