use std::ops::Range;

use crate::collection::Collection;
use crate::kernel::Kernel;
use crate::partition::pair_coordinates;
use crate::Distance;

// Fill every cell of the rows in `rows` and return their sum.
// `cells` must be exactly those rows of the matrix, so no other worker can touch them.
pub fn compute_rows(
    a: &Collection,
    b: &Collection,
    rows: Range<usize>,
    cells: &mut [Distance],
    kernel: Kernel,
) -> u64 {
    debug_assert_eq!(cells.len(), rows.len() * b.len());
    // chunks_mut(0) would panic, and there is nothing to compute anyway
    if b.is_empty() {
        return 0;
    }

    let mut partial = 0_u64;
    // One chunk of the output per row of A
    for (i, row) in rows.zip(cells.chunks_mut(b.len())) {
        let x = a.get(i);
        // Compare against every string in B
        for (cell, y) in row.iter_mut().zip(b.iter()) {
            *cell = kernel.distance(x, y);
            // Accumulate locally, the caller merges once
            partial += *cell as u64;
        }
    }
    partial
}

// As above, but over a range of flat (row, column) pair indices
pub fn compute_pairs(
    a: &Collection,
    b: &Collection,
    pairs: Range<usize>,
    cells: &mut [Distance],
    kernel: Kernel,
) -> u64 {
    debug_assert_eq!(cells.len(), pairs.len());
    let mut partial = 0_u64;
    for (index, cell) in pairs.zip(cells.iter_mut()) {
        // Recover the (row, column) this flat index stands for
        let (i, j) = pair_coordinates(index, b.len());
        *cell = kernel.distance(a.get(i), b.get(j));
        partial += *cell as u64;
    }
    partial
}
