use super::reporting::find_best_performer;
use std::time::Duration;

/// Size above which the suite policy skips bubble and insertion sort.
pub const QUADRATIC_SKIP_THRESHOLD: usize = 1000;

/// Time difference, in milliseconds, under which two results count as tied.
pub const DEFAULT_TIE_EPSILON_MS: f64 = 1e-6;

/// Datasets up to this size keep a copy of their values in the report.
pub const PREVIEW_LIMIT: usize = 20;

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub quadratic_skip_threshold: usize,
    pub warmup_runs: usize,
    pub tie_epsilon_ms: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            quadratic_skip_threshold: QUADRATIC_SKIP_THRESHOLD,
            warmup_runs: 0,
            tie_epsilon_ms: DEFAULT_TIE_EPSILON_MS,
        }
    }
}

/// Outcome of one (dataset, algorithm) measurement
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub name: String,
    pub comparisons: u64,
    pub elapsed: Duration,
    pub skipped: bool,
    /// False when the output failed verification
    pub verified: bool,
}

impl BenchmarkResult {
    /// Placeholder for an algorithm the caller's policy chose not to run.
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comparisons: 0,
            elapsed: Duration::ZERO,
            skipped: true,
            verified: true,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// All results for one dataset, in canonical algorithm order
#[derive(Clone, Debug)]
pub struct SuiteReport {
    pub dataset_name: String,
    pub size: usize,
    pub results: Vec<BenchmarkResult>,
    pub tie_epsilon_ms: f64,
    /// Input values, present when `size <= PREVIEW_LIMIT`
    pub preview: Option<Vec<i32>>,
}

impl SuiteReport {
    pub fn best(&self) -> Option<&BenchmarkResult> {
        find_best_performer(&self.results, self.tie_epsilon_ms)
    }

    pub fn any_skipped(&self) -> bool {
        self.results.iter().any(|r| r.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms_keeps_sub_millisecond_precision() {
        let mut result = BenchmarkResult::skipped("Quick Sort");
        result.skipped = false;
        result.elapsed = Duration::from_micros(1_234);
        assert!((result.elapsed_ms() - 1.234).abs() < 1e-9);
    }

    #[test]
    fn test_skipped_placeholder_is_zeroed() {
        let result = BenchmarkResult::skipped("Bubble Sort");
        assert!(result.skipped);
        assert_eq!(result.comparisons, 0);
        assert_eq!(result.elapsed, Duration::ZERO);
    }
}
