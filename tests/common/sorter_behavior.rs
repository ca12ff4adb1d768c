#![allow(dead_code)]

use super::{is_permutation, random_values};
use sortbench::{SortAlgorithm, is_sorted};

pub fn empty_input<S: SortAlgorithm>(sorter: &S) {
    let mut data: Vec<i32> = vec![];
    assert_eq!(sorter.sort(&mut data), 0);
    assert!(data.is_empty());
    assert!(is_sorted(&data));
}

pub fn single_element<S: SortAlgorithm>(sorter: &S) {
    let mut data = vec![42];
    assert_eq!(sorter.sort(&mut data), 0);
    assert_eq!(data, vec![42]);
}

pub fn two_elements<S: SortAlgorithm>(sorter: &S) {
    let mut data = vec![5, 3];
    sorter.sort(&mut data);
    assert_eq!(data, vec![3, 5]);
}

pub fn all_equal<S: SortAlgorithm>(sorter: &S) {
    let mut data = vec![7, 7, 7, 7];
    sorter.sort(&mut data);
    assert_eq!(data, vec![7, 7, 7, 7]);

    let mut large = vec![-1; 3000];
    sorter.sort(&mut large);
    assert!(large.iter().all(|&v| v == -1));
}

pub fn reversed_input<S: SortAlgorithm>(sorter: &S) {
    let mut data: Vec<i32> = (0..300).rev().collect();
    sorter.sort(&mut data);
    assert_eq!(data, (0..300).collect::<Vec<_>>());
}

pub fn random_input<S: SortAlgorithm>(sorter: &S) {
    for n in [3, 17, 256, 1000] {
        let input = random_values(n, -50, 50);
        let mut data = input.clone();
        sorter.sort(&mut data);
        assert!(is_sorted(&data), "{} failed on n={}", sorter.name(), n);
        assert!(is_permutation(&input, &data));
    }
}

pub fn extreme_values<S: SortAlgorithm>(sorter: &S) {
    let mut data = vec![i32::MAX, 0, i32::MIN, -1, i32::MAX, 1, i32::MIN];
    sorter.sort(&mut data);
    assert_eq!(data, vec![i32::MIN, i32::MIN, -1, 0, 1, i32::MAX, i32::MAX]);
}

/// Sorting already sorted data leaves it unchanged, and the count for that
/// input is the same every time.
pub fn idempotent<S: SortAlgorithm>(sorter: &S) {
    let mut data = random_values(200, 0, 1000);
    sorter.sort(&mut data);
    let once = data.clone();

    let second = sorter.sort(&mut data);
    assert_eq!(data, once);

    let third = sorter.sort(&mut data);
    assert_eq!(data, once);
    assert_eq!(second, third);
}
