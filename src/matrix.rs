use std::ops::Range;

use crate::buffer::try_filled;
use crate::error::Result;
use crate::Distance;

// Row-major m x n grid of pairwise distances.
// Cells start at zero and are written once by whichever worker owns them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<Distance>,
    rows: usize,
    cols: usize,
}

impl DistanceMatrix {
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        Ok(DistanceMatrix {
            cells: try_filled(rows, cols, 0, "distance matrix")?,
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Distance {
        assert!(col < self.cols, "column {} out of bounds", col);
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[Distance] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[Distance] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [Distance] {
        &mut self.cells
    }

    // Sum of all cells, widened so it can't overflow
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&d| d as u64).sum()
    }

    // Reset all cells so the matrix can be reused for another run
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    // Split the flat cell buffer into one mutable slice per range.
    // Ranges must be contiguous, ascending and cover exactly `0..rows * cols`,
    // which is what the partitioner produces for the pair space.
    pub fn split_cells_mut(&mut self, ranges: &[Range<usize>]) -> Vec<&mut [Distance]> {
        let mut rest = self.cells.as_mut_slice();
        let mut blocks = Vec::with_capacity(ranges.len());
        let mut offset = 0;
        for range in ranges {
            assert_eq!(range.start, offset, "ranges must be contiguous");
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            blocks.push(head);
            rest = tail;
            offset = range.end;
        }
        debug_assert!(rest.is_empty(), "ranges must cover the whole matrix");
        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let matrix = DistanceMatrix::zeroed(2, 3).unwrap();
        assert_eq!((matrix.rows(), matrix.cols()), (2, 3));
        assert_eq!(matrix.as_slice(), &[0; 6]);
        assert_eq!(matrix.total(), 0);
    }

    #[test]
    fn test_split_blocks_write_through() {
        let mut matrix = DistanceMatrix::zeroed(3, 2).unwrap();
        {
            let blocks = matrix.split_cells_mut(&[0..4, 4..6, 6..6]);
            assert_eq!(blocks.iter().map(|b| b.len()).collect::<Vec<_>>(), [4, 2, 0]);
            for (value, block) in blocks.into_iter().enumerate() {
                block.fill(value as Distance + 1);
            }
        }
        assert_eq!(matrix.row(0), &[1, 1]);
        assert_eq!(matrix.row(1), &[1, 1]);
        assert_eq!(matrix.row(2), &[2, 2]);
        assert_eq!(matrix.get(2, 1), 2);
        assert_eq!(matrix.total(), 8);
    }

    #[test]
    fn test_split_cells_mut() {
        let mut matrix = DistanceMatrix::zeroed(2, 3).unwrap();
        let blocks = matrix.split_cells_mut(&[0..4, 4..6]);
        assert_eq!(blocks[0].len(), 4);
        assert_eq!(blocks[1].len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_gap_between_ranges_panics() {
        let mut matrix = DistanceMatrix::zeroed(4, 1).unwrap();
        matrix.split_cells_mut(&[0..1, 2..4]);
    }

    #[test]
    fn test_clear() {
        let mut matrix = DistanceMatrix::zeroed(2, 2).unwrap();
        matrix.as_mut_slice()[3] = 5;
        assert_eq!(matrix.total(), 5);
        matrix.clear();
        assert_eq!(matrix.total(), 0);
    }
}
