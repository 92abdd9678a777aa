//! Progress capture

use pageocr_backend::ProgressSink;

/// Sink recording every progress notification in order.
#[derive(Debug, Clone, Default)]
pub struct ProgressRecorder {
    values: Vec<u8>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn last(&self) -> Option<u8> {
        self.values.last().copied()
    }

    /// Return the recorded values and start over.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.values)
    }

    /// Whether the values never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl ProgressSink for ProgressRecorder {
    fn progress(&mut self, percent: u8) {
        self.values.push(percent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder() {
        let mut rec = ProgressRecorder::new();
        rec.progress(10);
        rec.progress(40);
        assert!(rec.is_monotonic());
        assert_eq!(rec.last(), Some(40));
        assert_eq!(rec.take(), vec![10, 40]);
        assert!(rec.values().is_empty());
    }
}
