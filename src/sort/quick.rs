/// Quick sort with median-of-three pivots and Lomuto partitioning.
///
/// Pending ranges live on an explicit stack. The larger side of each
/// partition is pushed first so the smaller side is handled next, which keeps
/// the stack at O(log n) entries even for skewed splits.
pub fn quick_sort<T: Ord + Copy>(data: &mut [T]) -> u64 {
    if data.len() < 2 {
        return 0;
    }

    let mut comparisons = 0;
    let mut stack = vec![(0, data.len() - 1)];

    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }

        let (pivot, cost) = partition(data, low, high);
        comparisons += cost;

        let left = (pivot > low).then(|| (low, pivot - 1));
        let right = (pivot + 1 < high).then(|| (pivot + 1, high));

        if pivot - low > high - pivot {
            stack.extend(left);
            stack.extend(right);
        } else {
            stack.extend(right);
            stack.extend(left);
        }
    }

    comparisons
}

/// Picks the median of `data[low]`, `data[mid]`, `data[high]`.
///
/// Ranges of two elements use `high` directly. Otherwise the selection costs
/// two or three comparisons, which are returned with the chosen index.
fn median_of_three<T: Ord>(data: &[T], low: usize, high: usize) -> (usize, u64) {
    if high - low < 2 {
        return (high, 0);
    }
    let mid = low + (high - low) / 2;

    if data[low] < data[mid] {
        if data[mid] < data[high] {
            (mid, 2)
        } else if data[low] < data[high] {
            (high, 3)
        } else {
            (low, 3)
        }
    } else if data[low] < data[high] {
        (low, 2)
    } else if data[mid] < data[high] {
        (high, 3)
    } else {
        (mid, 3)
    }
}

/// Partitions `[low, high]` around a median-of-three pivot and returns the
/// pivot's final index together with the comparisons spent.
fn partition<T: Ord + Copy>(data: &mut [T], low: usize, high: usize) -> (usize, u64) {
    let (pivot_index, mut comparisons) = median_of_three(data, low, high);
    data.swap(pivot_index, high);
    let pivot = data[high];

    let mut boundary = low;
    for j in low..high {
        comparisons += 1;
        if data[j] <= pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
    }

    data.swap(boundary, high);
    (boundary, comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equal_terminates() {
        let mut data = vec![7, 7, 7, 7];
        quick_sort(&mut data);
        assert_eq!(data, vec![7, 7, 7, 7]);

        let mut many = vec![3; 2000];
        quick_sort(&mut many);
        assert!(many.iter().all(|&v| v == 3));
    }

    #[test]
    fn test_median_of_three_choices() {
        assert_eq!(median_of_three(&[1, 2, 3], 0, 2), (1, 2));
        assert_eq!(median_of_three(&[1, 3, 2], 0, 2), (2, 3));
        assert_eq!(median_of_three(&[2, 3, 1], 0, 2), (0, 3));
        assert_eq!(median_of_three(&[2, 1, 3], 0, 2), (0, 2));
        assert_eq!(median_of_three(&[3, 1, 2], 0, 2), (2, 3));
        assert_eq!(median_of_three(&[3, 2, 1], 0, 2), (1, 3));
        assert_eq!(median_of_three(&[5, 4], 0, 1), (1, 0));
    }

    #[test]
    fn test_two_elements() {
        let mut data = vec![2, 1];
        // No selection comparisons, one against the pivot
        assert_eq!(quick_sort(&mut data), 1);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_three_sorted_elements() {
        // Median is the middle: 2 selection + 2 partition comparisons
        let mut data = vec![1, 2, 3];
        assert_eq!(quick_sort(&mut data), 4);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut data = vec![9, 4, 6, 1, 8, 2, 5];
        let (pivot, _) = partition(&mut data, 0, 6);
        let value = data[pivot];
        assert!(data[..pivot].iter().all(|&v| v <= value));
        assert!(data[pivot + 1..].iter().all(|&v| v > value));
    }

    #[test]
    fn test_organ_pipe_input() {
        let mut data: Vec<i32> = (0..500).chain((0..500).rev()).collect();
        quick_sort(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }
}
