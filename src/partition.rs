// Static block partitioning of an index space among a fixed number of workers.
//
// Every worker gets one contiguous range of `ceil(units / workers)` units,
// clipped at `units`. The last busy worker may get a shorter block and any
// surplus workers get an empty range. Together the ranges cover `0..units`
// exactly once.

use std::ops::Range;

// Units given to each worker before clipping
pub fn block_size(units: usize, workers: usize) -> usize {
    assert!(workers > 0, "need at least one worker");
    (units + workers - 1) / workers
}

// The range owned by `worker` (0-based)
pub fn block_range(units: usize, workers: usize, worker: usize) -> Range<usize> {
    assert!(worker < workers, "worker {} out of {}", worker, workers);
    let size = block_size(units, workers);
    let start = (size * worker).min(units);
    let end = (size * (worker + 1)).min(units);
    start..end
}

// All ranges, in worker order
pub fn block_ranges(units: usize, workers: usize) -> Vec<Range<usize>> {
    (0..workers)
        .map(|worker| block_range(units, workers, worker))
        .collect()
}

// Number of workers that receive a non-empty range, without building the ranges
pub fn busy_workers(units: usize, workers: usize) -> usize {
    let size = block_size(units, workers);
    if size == 0 {
        return 0;
    }
    // Full blocks, plus one for a clipped remainder
    (units + size - 1) / size
}

// A flat cell index over an m x n pair space, split back into (row, column)
#[inline]
pub fn pair_coordinates(index: usize, cols: usize) -> (usize, usize) {
    (index / cols, index % cols)
}
