use log::debug;
use rayon::prelude::*;

use crate::config::check_threads;
use crate::error::Result;
use crate::kernel::Kernel;
use crate::partition::block_ranges;
use crate::reduce::TotalDiff;
use crate::store::Workload;
use crate::worker::compute_pairs;

// Parallel loop over the collapsed (row, column) pair space.
//
// The m * n cells are cut into one contiguous block per thread up front, and
// a rayon pool with exactly `threads` threads runs the blocks. Blocks never
// share a cell, so iterations need no synchronization; each block merges its
// partial sum once.
pub fn run_parallel_loop(workload: &mut Workload, threads: usize, kernel: Kernel) -> Result<u64> {
    // The range list below holds one entry per thread, so cap it first
    check_threads(threads)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("hamming-loop-{}", i))
        .build()?;

    let (a, b, matrix) = workload.parts_mut();
    // Static schedule: block boundaries are fixed before any thread runs
    let ranges = block_ranges(matrix.as_slice().len(), threads);
    let blocks = matrix.split_cells_mut(&ranges);
    let total = TotalDiff::new();

    pool.install(|| {
        ranges
            .into_par_iter()
            .zip(blocks)
            // One block per task, so every thread gets its own block
            .with_max_len(1)
            .for_each(|(pairs, cells)| {
                // Fill this block, then publish its sum once
                let partial = compute_pairs(a, b, pairs.clone(), cells, kernel);
                total.merge(partial);
                debug!(
                    "Pairs {:?} merged partial sum {} on {:?}",
                    pairs,
                    partial,
                    rayon::current_thread_index()
                );
            });
    });

    Ok(total.into_inner())
}
