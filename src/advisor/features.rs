use std::collections::HashSet;

/// Fraction of adjacent pairs already in non-decreasing order.
///
/// Sequences shorter than two elements are fully sorted.
pub fn sortedness(data: &[i32]) -> f64 {
    if data.len() < 2 {
        return 1.0;
    }
    let in_order = data.windows(2).filter(|w| w[0] <= w[1]).count();
    in_order as f64 / (data.len() - 1) as f64
}

/// Distinct values divided by length; 0.0 for an empty sequence.
pub fn unique_ratio(data: &[i32]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<i32> = data.iter().copied().collect();
    distinct.len() as f64 / data.len() as f64
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetFeatures {
    pub size: usize,
    pub sortedness: f64,
    pub unique_ratio: f64,
}

impl DatasetFeatures {
    pub fn extract(data: &[i32]) -> Self {
        Self {
            size: data.len(),
            sortedness: sortedness(data),
            unique_ratio: unique_ratio(data),
        }
    }
}
