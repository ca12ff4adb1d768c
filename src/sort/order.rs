/// Returns true when every adjacent pair is in non-decreasing order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Index of the first element smaller than its predecessor, if any.
pub fn first_violation<T: Ord>(data: &[T]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}
