use crate::error::{Result, SortBenchError};
use rand::Rng;
use std::fmt;

/// Largest size any generator accepts; values `1..=n` must fit in an `i32`.
const MAX_DATASET_SIZE: usize = i32::MAX as usize;

/// Values the few-unique generator draws from.
const FEW_UNIQUE_POOL: [i32; 6] = [-5, -1, 0, 3, 7, 12];

/// A named integer sequence handed to the runner
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub name: String,
    pub values: Vec<i32>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, values: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    Random,
    NearlySorted,
    Reversed,
    FewUnique,
    LargeRandom,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 5] = [
        DatasetKind::Random,
        DatasetKind::NearlySorted,
        DatasetKind::Reversed,
        DatasetKind::FewUnique,
        DatasetKind::LargeRandom,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            DatasetKind::Random => "Random",
            DatasetKind::NearlySorted => "Nearly Sorted",
            DatasetKind::Reversed => "Reversed",
            DatasetKind::FewUnique => "Few Unique",
            DatasetKind::LargeRandom => "Large Random",
        }
    }

    /// Smallest size accepted for this kind.
    ///
    /// Large random datasets must exceed the quadratic skip threshold.
    pub const fn min_size(self) -> usize {
        match self {
            DatasetKind::LargeRandom => 1001,
            _ => 1,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build a dataset of `size` elements of the given kind.
pub fn generate_dataset<R: Rng + ?Sized>(
    kind: DatasetKind,
    size: usize,
    rng: &mut R,
) -> Result<Dataset> {
    if size < kind.min_size() || i32::try_from(size).is_err() {
        return Err(SortBenchError::InvalidDatasetSize {
            kind: kind.name(),
            size,
            min: kind.min_size(),
            max: MAX_DATASET_SIZE,
        });
    }

    let values = match kind {
        DatasetKind::Random => random_values(size, -50, 50, rng),
        DatasetKind::NearlySorted => nearly_sorted_values(size, rng),
        DatasetKind::Reversed => reversed_values(size),
        DatasetKind::FewUnique => few_unique_values(size, rng),
        DatasetKind::LargeRandom => random_values(size, 0, 100_000, rng),
    };
    Ok(Dataset::new(kind.name(), values))
}

/// The fixed demo set: one small dataset per kind plus a large random one.
pub fn demo_datasets<R: Rng + ?Sized>(rng: &mut R) -> Vec<Dataset> {
    vec![
        Dataset::new(DatasetKind::Random.name(), random_values(15, -50, 50, rng)),
        Dataset::new(DatasetKind::NearlySorted.name(), nearly_sorted_values(20, rng)),
        Dataset::new(DatasetKind::Reversed.name(), reversed_values(25)),
        Dataset::new(DatasetKind::FewUnique.name(), few_unique_values(200, rng)),
        Dataset::new(
            DatasetKind::LargeRandom.name(),
            random_values(5000, 0, 100_000, rng),
        ),
    ]
}

/// Uniform values in `[min, max]`.
pub fn random_values<R: Rng + ?Sized>(n: usize, min: i32, max: i32, rng: &mut R) -> Vec<i32> {
    (0..n).map(|_| rng.random_range(min..=max)).collect()
}

/// `1..=n` disturbed by `max(1, n / 10)` random swaps.
pub fn nearly_sorted_values<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i32> {
    if n < 2 {
        return vec![0; n];
    }
    let mut data: Vec<i32> = (1..=i32::MAX).take(n).collect();
    let swaps = (n / 10).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        data.swap(a, b);
    }
    data
}

/// `n, n - 1, ..., 1`
pub fn reversed_values(n: usize) -> Vec<i32> {
    let mut data: Vec<i32> = (1..=i32::MAX).take(n).collect();
    data.reverse();
    data
}

pub fn few_unique_values<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i32> {
    (0..n)
        .map(|_| FEW_UNIQUE_POOL[rng.random_range(0..FEW_UNIQUE_POOL.len())])
        .collect()
}
