use crate::collection::Collection;
use crate::error::Result;
use crate::kernel::Kernel;
use crate::matrix::DistanceMatrix;
use crate::store::Workload;
use crate::worker::compute_rows;

// Single-threaded baseline: every row on the calling thread
pub fn run_serial(workload: &mut Workload, kernel: Kernel) -> u64 {
    let (a, b, matrix) = workload.parts_mut();
    compute_rows(a, b, 0..a.len(), matrix.as_mut_slice(), kernel)
}

// Compute a fresh matrix and total without touching any workload
pub fn serial_matrix(a: &Collection, b: &Collection, kernel: Kernel) -> Result<(DistanceMatrix, u64)> {
    let mut matrix = DistanceMatrix::zeroed(a.len(), b.len())?;
    let total = compute_rows(a, b, 0..a.len(), matrix.as_mut_slice(), kernel);
    Ok((matrix, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(a: &[&str], b: &[&str]) -> Workload {
        let a = Collection::from_sequences(&a.iter().map(|s| s.as_bytes()).collect::<Vec<_>>())
            .unwrap();
        let b = Collection::from_sequences(&b.iter().map(|s| s.as_bytes()).collect::<Vec<_>>())
            .unwrap();
        Workload::from_collections(a, b).unwrap()
    }

    #[test]
    fn test_two_by_two() {
        let mut workload = workload(&["000", "111"], &["000", "101"]);
        assert_eq!(run_serial(&mut workload, Kernel::Scalar), 6);
        assert_eq!(workload.matrix().row(0), &[0, 2]);
        assert_eq!(workload.matrix().row(1), &[3, 1]);
    }

    #[test]
    fn test_identical_strings() {
        let mut workload = workload(&["12345"], &["12345"]);
        assert_eq!(run_serial(&mut workload, Kernel::Scalar), 0);
        assert_eq!(workload.matrix().as_slice(), &[0]);
    }

    #[test]
    fn test_serial_matrix_matches_run_serial() {
        let mut workload = Workload::generate(5, 7, 40, 3).unwrap();
        let total = run_serial(&mut workload, Kernel::Wide);
        let (matrix, fresh_total) = serial_matrix(workload.a(), workload.b(), Kernel::Scalar).unwrap();
        assert_eq!(total, fresh_total);
        assert_eq!(&matrix, workload.matrix());
        assert_eq!(matrix.total(), total);
    }
}
