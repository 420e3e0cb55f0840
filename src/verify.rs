use crate::error::{HammingError, Result};
use crate::kernel::Kernel;
use crate::matrix::DistanceMatrix;
use crate::store::Workload;
use crate::variants::serial_matrix;

// Compare a computed matrix and total against the expected ones, naming the
// first cell that differs
pub fn check_matches(
    expected: &DistanceMatrix,
    expected_total: u64,
    actual: &DistanceMatrix,
    actual_total: u64,
) -> Result<()> {
    if (expected.rows(), expected.cols()) != (actual.rows(), actual.cols()) {
        return Err(HammingError::mismatch(format!(
            "matrix shape {}x{} differs from expected {}x{}",
            actual.rows(),
            actual.cols(),
            expected.rows(),
            expected.cols()
        )));
    }
    let differing = expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .position(|(e, a)| e != a);
    if let Some(index) = differing {
        let (row, col) = (index / expected.cols(), index % expected.cols());
        return Err(HammingError::mismatch(format!(
            "cell ({}, {}) is {}, expected {}",
            row,
            col,
            actual.get(row, col),
            expected.get(row, col)
        )));
    }
    if expected_total != actual_total {
        return Err(HammingError::mismatch(format!(
            "total is {}, expected {}",
            actual_total, expected_total
        )));
    }
    Ok(())
}

// Recompute the workload serially and check the filled matrix and reported total against it
pub fn verify_workload(workload: &Workload, total: u64, kernel: Kernel) -> Result<()> {
    let (expected, expected_total) = serial_matrix(workload.a(), workload.b(), kernel)?;
    check_matches(&expected, expected_total, workload.matrix(), total)
}
