use rand::{rngs::SmallRng, SeedableRng};

use crate::collection::Collection;
use crate::error::{HammingError, Result};
use crate::matrix::DistanceMatrix;

// Owns both input collections and the matrix the variants write into
#[derive(Clone, Debug)]
pub struct Workload {
    a: Collection,
    b: Collection,
    matrix: DistanceMatrix,
}

impl Workload {
    // Generate A (m sequences) then B (n sequences) from a single seeded stream
    pub fn generate(m: usize, n: usize, length: usize, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let a = Collection::random(m, length, &mut rng)?;
        let b = Collection::random(n, length, &mut rng)?;
        Self::from_collections(a, b)
    }

    pub fn from_collections(a: Collection, b: Collection) -> Result<Self> {
        if !a.is_empty() && !b.is_empty() && a.sequence_length() != b.sequence_length() {
            return Err(HammingError::length_mismatch(format!(
                "collection A has sequences of length {}, collection B of length {}",
                a.sequence_length(),
                b.sequence_length()
            )));
        }
        let matrix = DistanceMatrix::zeroed(a.len(), b.len())?;
        Ok(Workload { a, b, matrix })
    }

    pub fn a(&self) -> &Collection {
        &self.a
    }

    pub fn b(&self) -> &Collection {
        &self.b
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    // Borrow the read-only inputs alongside the writable matrix
    pub fn parts_mut(&mut self) -> (&Collection, &Collection, &mut DistanceMatrix) {
        (&self.a, &self.b, &mut self.matrix)
    }

    // Zero the matrix so another variant can fill it from scratch
    pub fn reset(&mut self) {
        self.matrix.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shapes() {
        let workload = Workload::generate(3, 5, 7, 0).unwrap();
        assert_eq!(workload.a().len(), 3);
        assert_eq!(workload.b().len(), 5);
        assert_eq!(workload.b().sequence_length(), 7);
        assert_eq!((workload.matrix().rows(), workload.matrix().cols()), (3, 5));
    }

    #[test]
    fn test_generate_is_seeded() {
        let first = Workload::generate(4, 4, 32, 11).unwrap();
        let second = Workload::generate(4, 4, 32, 11).unwrap();
        assert_eq!(first.a(), second.a());
        assert_eq!(first.b(), second.b());
        // A and B continue the same stream rather than restarting it
        assert_ne!(first.a().get(0), first.b().get(0));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let a = Collection::from_sequences(&["00"].map(str::as_bytes)).unwrap();
        let b = Collection::from_sequences(&["000"].map(str::as_bytes)).unwrap();
        assert!(matches!(
            Workload::from_collections(a, b),
            Err(HammingError::LengthMismatch { .. })
        ));
    }
}
