// Comparison Sort Benchmark Library

#![allow(clippy::needless_range_loop)]

use std::fmt;
use std::str::FromStr;

// Core trait implemented by every sort the runner can measure
pub trait SortAlgorithm {
    /// Display label, shared with the advisor's predictions
    fn name(&self) -> &'static str;

    /// Sort `data` in ascending order and return the number of comparisons performed.
    fn sort(&self, data: &mut [i32]) -> u64;
}

/// The four benchmarked strategies, in canonical report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Quadratic sorts are the ones the suite policy skips on large inputs.
    pub const fn is_quadratic(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion)
    }
}

impl SortAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        Algorithm::name(*self)
    }

    fn sort(&self, data: &mut [i32]) -> u64 {
        match self {
            Algorithm::Bubble => sort::bubble_sort(data),
            Algorithm::Insertion => sort::insertion_sort(data),
            Algorithm::Merge => sort::merge_sort(data),
            Algorithm::Quick => sort::quick_sort(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Algorithm::name(*self))
    }
}

impl FromStr for Algorithm {
    type Err = SortBenchError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == label)
            .ok_or_else(|| SortBenchError::UnknownAlgorithm(label.to_string()))
    }
}

// Implementations
pub mod advisor;
pub mod benchmark;
pub mod error;
pub mod sort;

// Export the main types
pub use advisor::{Advisor, AdvisorMode, predict_best_algorithm};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, BenchmarkRunner, Dataset, SuiteReport};
pub use error::{Result, SortBenchError};
pub use sort::order::is_sorted;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Heap Sort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SortBenchError::UnknownAlgorithm("Heap Sort".to_string()));
    }

    #[test]
    fn test_dispatch_sorts_through_trait_object() {
        let sorters: Vec<Box<dyn SortAlgorithm>> =
            Algorithm::ALL.iter().map(|a| Box::new(*a) as Box<dyn SortAlgorithm>).collect();
        for sorter in sorters {
            let mut data = vec![3, -1, 2, 2, 0];
            sorter.sort(&mut data);
            assert_eq!(data, vec![-1, 0, 2, 2, 3], "{}", sorter.name());
        }
    }

    #[test]
    fn test_only_bubble_and_insertion_are_quadratic() {
        assert!(Algorithm::Bubble.is_quadratic());
        assert!(Algorithm::Insertion.is_quadratic());
        assert!(!Algorithm::Merge.is_quadratic());
        assert!(!Algorithm::Quick.is_quadratic());
    }
}
