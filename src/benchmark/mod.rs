pub mod input;
pub mod reporting;
pub mod runner;
pub mod types;
pub mod verification;

pub use input::{Dataset, DatasetKind, demo_datasets, generate_dataset};
pub use reporting::{
    PredictionOutcome, advisor_accuracy, benchmark_results_to_csv, find_best_performer,
    format_elapsed_ms, print_advisor_accuracy, print_compact_summary, print_prediction,
    print_suite_report, write_csv_report,
};
pub use runner::{BenchmarkRunner, benchmark_sort};
pub use types::{
    BenchmarkConfig, BenchmarkResult, DEFAULT_TIE_EPSILON_MS, PREVIEW_LIMIT,
    QUADRATIC_SKIP_THRESHOLD, SuiteReport,
};
pub use verification::{MultisetVerifier, OutputVerifier, SimpleVerifier, verify_sorted};
