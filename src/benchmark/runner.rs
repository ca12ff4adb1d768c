use super::input::Dataset;
use super::types::{BenchmarkConfig, BenchmarkResult, PREVIEW_LIMIT, SuiteReport};
use super::verification::{OutputVerifier, verify_sorted};
use crate::{Algorithm, SortAlgorithm};
use std::time::Instant;
use tracing::{debug, error, info};

/// Measure one sort on a private copy of `input` with the default configuration.
pub fn benchmark_sort<S: SortAlgorithm + ?Sized>(input: &[i32], algorithm: &S) -> BenchmarkResult {
    BenchmarkRunner::default().run(input, algorithm)
}

pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    verifier: Option<Box<dyn OutputVerifier>>,
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new(BenchmarkConfig::default())
    }
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            verifier: None,
        }
    }

    /// Extra check run after the order check on every measured sort.
    pub fn set_verifier(&mut self, verifier: Box<dyn OutputVerifier>) {
        self.verifier = Some(verifier);
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Sort a copy of `input` and report comparisons and elapsed time.
    ///
    /// The caller's slice is never touched. An output that fails verification
    /// is logged as an error and flagged in `verified`; the measured values are
    /// still returned.
    pub fn run<S: SortAlgorithm + ?Sized>(&self, input: &[i32], algorithm: &S) -> BenchmarkResult {
        let name = algorithm.name();

        if self.config.warmup_runs > 0 {
            self.run_warmup_runs(input, algorithm);
        }

        let mut data = input.to_vec();
        let start = Instant::now();
        let comparisons = algorithm.sort(&mut data);
        let elapsed = start.elapsed();

        let verified = match self.verify(name, input, &data) {
            Ok(()) => true,
            Err(err) => {
                error!(algorithm = name, n = input.len(), error = %err, "sort output failed verification");
                false
            }
        };

        let result = BenchmarkResult {
            name: name.to_string(),
            comparisons,
            elapsed,
            skipped: false,
            verified,
        };
        debug!(
            algorithm = name,
            n = input.len(),
            comparisons,
            elapsed_ms = result.elapsed_ms(),
            "benchmark run complete"
        );
        result
    }

    /// Run all four algorithms on `dataset` in canonical order.
    ///
    /// Bubble and insertion sort are skipped when the dataset is larger than
    /// the configured threshold.
    pub fn run_suite(&self, dataset: &Dataset) -> SuiteReport {
        let n = dataset.len();
        let skip_quadratic = n > self.config.quadratic_skip_threshold;
        if skip_quadratic {
            info!(
                dataset = %dataset.name,
                n,
                threshold = self.config.quadratic_skip_threshold,
                "skipping quadratic sorts"
            );
        }

        let results = Algorithm::ALL
            .iter()
            .map(|algorithm| {
                if skip_quadratic && algorithm.is_quadratic() {
                    BenchmarkResult::skipped(algorithm.name())
                } else {
                    self.run(&dataset.values, algorithm)
                }
            })
            .collect();

        SuiteReport {
            dataset_name: dataset.name.clone(),
            size: n,
            results,
            tie_epsilon_ms: self.config.tie_epsilon_ms,
            preview: (n <= PREVIEW_LIMIT).then(|| dataset.values.clone()),
        }
    }

    fn run_warmup_runs<S: SortAlgorithm + ?Sized>(&self, input: &[i32], algorithm: &S) {
        for _ in 0..self.config.warmup_runs {
            let mut data = input.to_vec();
            algorithm.sort(&mut data);
        }
    }

    fn verify(&self, name: &str, input: &[i32], output: &[i32]) -> crate::Result<()> {
        verify_sorted(name, output)?;
        match &self.verifier {
            Some(verifier) => verifier.verify(name, input, output),
            None => Ok(()),
        }
    }
}
