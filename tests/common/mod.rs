#![allow(dead_code)]

use rand::Rng;

pub mod sorter_behavior;

pub fn random_values(n: usize, min: i32, max: i32) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(min..=max)).collect()
}

/// Same multiset of values, regardless of order.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
