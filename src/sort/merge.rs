/// Top-down merge sort.
///
/// Stable: on equal heads the left half wins. A single auxiliary buffer the
/// size of the input is allocated here and shared by every merge step.
pub fn merge_sort<T: Ord + Copy>(data: &mut [T]) -> u64 {
    if data.len() < 2 {
        return 0;
    }
    let mut buffer = data.to_vec();
    let right = data.len() - 1;
    sort_range(data, &mut buffer, 0, right)
}

fn sort_range<T: Ord + Copy>(data: &mut [T], buffer: &mut [T], left: usize, right: usize) -> u64 {
    if left >= right {
        return 0;
    }
    let mid = left + (right - left) / 2;
    let mut comparisons = sort_range(data, buffer, left, mid);
    comparisons += sort_range(data, buffer, mid + 1, right);
    comparisons + merge_sections(data, buffer, left, mid, right)
}

/// Merges the sorted ranges `[left, mid]` and `[mid + 1, right]`.
fn merge_sections<T: Ord + Copy>(
    data: &mut [T],
    buffer: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
) -> u64 {
    let mut comparisons = 0;
    let (mut i, mut j, mut k) = (left, mid + 1, left);

    while i <= mid && j <= right {
        comparisons += 1;
        if data[i] <= data[j] {
            buffer[k] = data[i];
            i += 1;
        } else {
            buffer[k] = data[j];
            j += 1;
        }
        k += 1;
    }

    // Remainders are copied without comparing
    let left_rest = mid + 1 - i;
    buffer[k..k + left_rest].copy_from_slice(&data[i..=mid]);
    k += left_rest;
    if j <= right {
        buffer[k..=right].copy_from_slice(&data[j..=right]);
    }

    data[left..=right].copy_from_slice(&buffer[left..=right]);
    comparisons
}
