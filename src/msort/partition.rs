/// Partitioning of the array across worker threads.
///
/// Partitions 0..P-2 each own exactly `total / threads` contiguous
/// elements; the last partition absorbs the remainder, so it is the
/// largest whenever `threads` does not divide `total`. A power-of-two
/// thread count keeps the merge tree a perfect binary tree; only the
/// last partition's size has to tolerate a non-dividing length.
use std::ops::Range;

/// Elements owned by every partition except possibly the last.
#[inline]
pub fn chunk_len(total: usize, threads: usize) -> usize {
    total / threads
}

/// Index range of partition `index` out of `threads`.
pub fn partition(total: usize, threads: usize, index: usize) -> Range<usize> {
    debug_assert!(index < threads);
    let chunk = chunk_len(total, threads);
    let start = index * chunk;
    let end = if index == threads - 1 {
        total
    } else {
        start + chunk
    };
    start..end
}
