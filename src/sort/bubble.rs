/// Bubble sort that stops after the first pass without a swap.
///
/// Every adjacent pair examined counts as one comparison, whether or not it
/// swaps.
pub fn bubble_sort<T: Ord>(data: &mut [T]) -> u64 {
    let n = data.len();
    let mut comparisons = 0;
    if n < 2 {
        return comparisons;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - 1 - i {
            comparisons += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    comparisons
}
