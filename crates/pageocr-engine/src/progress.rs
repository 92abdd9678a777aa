//! Progress bridge between the backend and the caller's sink

use pageocr_backend::ProgressSink;

/// Final percentage reported when recognition finishes.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Relays backend progress for a single recognition call.
///
/// Backends do not always report completion, so [`finish`](Self::finish)
/// sends a terminal 100 notification. The monitor is consumed by `finish`
/// and cannot be reused for another call.
pub struct ProgressMonitor<'a> {
    sink: &'a mut dyn ProgressSink,
    last: Option<u8>,
}

impl<'a> ProgressMonitor<'a> {
    pub fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self { sink, last: None }
    }

    /// Last percentage forwarded to the sink.
    pub fn last(&self) -> Option<u8> {
        self.last
    }

    /// Report completion.
    pub fn finish(mut self) {
        self.progress(PROGRESS_COMPLETE);
    }
}

impl ProgressSink for ProgressMonitor<'_> {
    fn progress(&mut self, percent: u8) {
        let percent = percent.min(PROGRESS_COMPLETE);
        self.last = Some(percent);
        self.sink.progress(percent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageocr_backend::NoProgress;

    #[test]
    fn test_finish_emits_100() {
        let mut seen = Vec::new();
        let mut sink = |p: u8| seen.push(p);
        let monitor = ProgressMonitor::new(&mut sink);
        monitor.finish();
        assert_eq!(seen, vec![100]);
    }

    #[test]
    fn test_relays_and_clamps() {
        let mut seen = Vec::new();
        let mut sink = |p: u8| seen.push(p);
        let mut monitor = ProgressMonitor::new(&mut sink);
        monitor.progress(0);
        monitor.progress(40);
        monitor.progress(250);
        assert_eq!(monitor.last(), Some(100));
        monitor.finish();
        assert_eq!(seen, vec![0, 40, 100, 100]);
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NoProgress;
        let mut monitor = ProgressMonitor::new(&mut sink);
        monitor.progress(30);
        assert_eq!(monitor.last(), Some(30));
        monitor.finish();
    }
}
