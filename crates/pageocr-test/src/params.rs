//! Regression test parameters and operations

use pageocr_core::TextRegion;
use tracing_subscriber::filter::LevelFilter;

/// Log level for regression runs, read from `REGTEST_LOG`.
///
/// Defaults to `warn`.
pub fn log_level_from_env() -> LevelFilter {
    match std::env::var("REGTEST_LOG")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "off" => LevelFilter::OFF,
        "error" => LevelFilter::ERROR,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => LevelFilter::WARN,
    }
}

/// Route engine logs to the test harness.
///
/// Safe to call repeatedly; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level_from_env())
        .with_test_writer()
        .try_init();
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check and every
/// recorded failure. Checks never panic; call [`cleanup`](Self::cleanup)
/// at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "extract")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters and install log capture.
    pub fn new(test_name: &str) -> Self {
        init_tracing();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    fn fail(&mut self, what: &str, detail: String) -> bool {
        let msg = format!(
            "Failure in {}_reg: {} for index {}\n{}",
            self.test_name, what, self.index, detail
        );
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if values match within `delta`, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(
                "value comparison",
                format!(
                    "difference = {} but allowed delta = {}\nexpected = {}, actual = {}",
                    diff, delta, expected, actual
                ),
            )
        } else {
            true
        }
    }

    /// Compare two strings for exact equality
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(
                "string comparison",
                format!("expected = {:?}\nactual   = {:?}", expected, actual),
            )
        } else {
            true
        }
    }

    /// Compare two region lists: geometry, flags and text must match
    /// exactly, confidences within 1e-4.
    pub fn compare_regions(&mut self, expected: &[TextRegion], actual: &[TextRegion]) -> bool {
        self.index += 1;

        if expected.len() != actual.len() {
            return self.fail(
                "region comparison",
                format!("counts: {} vs {}", expected.len(), actual.len()),
            );
        }
        for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
            let same = e.rect == a.rect
                && e.flags == a.flags
                && e.text == a.text
                && (e.confidence - a.confidence).abs() <= 1e-4;
            if !same {
                return self.fail(
                    "region comparison",
                    format!("region {}:\nexpected = {:?}\nactual   = {:?}", i, e, a),
                );
            }
        }
        true
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if condition {
            true
        } else {
            self.fail("check", what.to_string())
        }
    }

    /// Finish the test and report results
    ///
    /// # Returns
    ///
    /// `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks so far have passed
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageocr_core::Rectangle;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.1));
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::new("params_strings");
        assert!(rp.compare_strings("abc", "abc"));
        assert!(!rp.compare_strings("abc", "abd"));
        assert!(!rp.is_success());
    }

    #[test]
    fn test_compare_regions() {
        let mut rp = RegParams::new("params_regions");
        let a = vec![TextRegion::new(Rectangle::from_corners(0, 0, 5, 5))];
        let mut b = a.clone();
        assert!(rp.compare_regions(&a, &b));
        b[0].confidence = 0.5;
        assert!(!rp.compare_regions(&a, &b));
        assert!(!rp.compare_regions(&a, &[]));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_check() {
        let mut rp = RegParams::new("params_check");
        assert!(rp.check(true, "always"));
        assert!(rp.cleanup());
    }
}
