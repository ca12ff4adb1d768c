/// Insertion sort; each predecessor examined for the held key counts once,
/// including the one that stops the shift.
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) -> u64 {
    let mut comparisons = 0;

    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if data[j - 1] > key {
                data[j] = data[j - 1];
                j -= 1;
            } else {
                break;
            }
        }
        data[j] = key;
    }

    comparisons
}
