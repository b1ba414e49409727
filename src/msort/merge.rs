/// Merge `run[..mid]` and `run[mid..]` in place.
///
/// Both runs must already be sorted ascending and non-empty. The merged
/// result is written back over the combined range via a scratch buffer
/// sized to the combined length, allocated per call and dropped on return.
///
/// Non-stable: an element moves from the right run only when the left head
/// is strictly greater, so equal elements drain left-run-first.
pub fn merge_adjacent(run: &mut [i64], mid: usize) {
    assert!(
        mid > 0 && mid < run.len(),
        "merge requires two non-empty runs (mid={}, len={})",
        mid,
        run.len()
    );

    let mut scratch = Vec::with_capacity(run.len());
    let mut left = 0;
    let mut right = mid;

    while left < mid && right < run.len() {
        if run[left] > run[right] {
            scratch.push(run[right]);
            right += 1;
        } else {
            scratch.push(run[left]);
            left += 1;
        }
    }

    // Exactly one run has elements left; drain it.
    scratch.extend_from_slice(&run[left..mid]);
    scratch.extend_from_slice(&run[right..]);

    run.copy_from_slice(&scratch);
}
