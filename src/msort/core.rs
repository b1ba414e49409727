/// Sequential recursive merge sort and the post-hoc sortedness check.
use super::merge::merge_adjacent;

/// Sort a slice in place, ascending, single-threaded.
///
/// Classic top-down merge sort: halve at `len / 2` (odd lengths give the
/// right half the extra element), recurse, merge. This is also what each
/// worker thread runs over its own partition in the parallel path.
pub fn sort_sequential(data: &mut [i64]) {
    let len = data.len();
    if len < 2 {
        return;
    }
    if len == 2 {
        if data[0] > data[1] {
            data.swap(0, 1);
        }
        return;
    }

    let mid = len / 2;
    sort_sequential(&mut data[..mid]);
    sort_sequential(&mut data[mid..]);
    merge_adjacent(data, mid);
}

/// Check ascending (non-strict) order. Empty and single-element slices
/// are sorted.
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
