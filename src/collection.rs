use rand::Rng;

use crate::buffer::try_filled;
use crate::error::{HammingError, Result};
use crate::generator::fill_random;
use crate::Symbol;

// An ordered set of equal-length sequences, stored back to back in one buffer.
// Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    symbols: Vec<Symbol>,
    count: usize,
    sequence_length: usize,
}

impl Collection {
    // Generate `count` random sequences, continuing the caller's RNG stream
    pub fn random(count: usize, sequence_length: usize, rng: &mut impl Rng) -> Result<Self> {
        let mut symbols = try_filled(count, sequence_length, 0, "sequence collection")?;
        fill_random(&mut symbols, rng);
        Ok(Collection {
            symbols,
            count,
            sequence_length,
        })
    }

    // Build a collection from explicit sequences, which must all share a length
    pub fn from_sequences<S: AsRef<[Symbol]>>(sequences: &[S]) -> Result<Self> {
        let sequence_length = sequences.first().map_or(0, |s| s.as_ref().len());
        let mut symbols = Vec::with_capacity(sequences.len() * sequence_length);
        for (index, sequence) in sequences.iter().enumerate() {
            let sequence = sequence.as_ref();
            if sequence.len() != sequence_length {
                return Err(HammingError::length_mismatch(format!(
                    "sequence {} has length {}, expected {}",
                    index,
                    sequence.len(),
                    sequence_length
                )));
            }
            symbols.extend_from_slice(sequence);
        }
        Ok(Collection {
            symbols,
            count: sequences.len(),
            sequence_length,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    // Panics if `index` is out of bounds
    pub fn get(&self, index: usize) -> &[Symbol] {
        assert!(index < self.count, "sequence index {} out of bounds", index);
        let start = index * self.sequence_length;
        &self.symbols[start..start + self.sequence_length]
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[Symbol]> + '_ {
        (0..self.count).map(move |index| self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, ALPHABET};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_from_sequences() {
        let collection = Collection::from_sequences(&["000", "111", "010"].map(str::as_bytes))
            .unwrap();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.sequence_length(), 3);
        assert_eq!(collection.get(2), b"010");
        assert_eq!(collection.iter().count(), 3);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let err = Collection::from_sequences(&["000", "11"].map(str::as_bytes)).unwrap_err();
        assert!(matches!(err, HammingError::LengthMismatch { .. }));
    }

    #[test]
    fn test_random_matches_generator_stream() {
        let mut rng = SmallRng::seed_from_u64(9);
        let collection = Collection::random(4, 16, &mut rng).unwrap();
        assert_eq!(collection.len(), 4);
        // The first sequence is exactly what a freshly seeded generator yields
        assert_eq!(collection.get(0), generate(16, 9).as_symbols());
        assert!(collection.iter().flatten().all(|s| ALPHABET.contains(s)));
    }

    #[test]
    fn test_zero_length_sequences() {
        let mut rng = SmallRng::seed_from_u64(0);
        let collection = Collection::random(3, 0, &mut rng).unwrap();
        assert_eq!(collection.len(), 3);
        assert!(collection.get(1).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        let collection = Collection::from_sequences(&["0"].map(str::as_bytes)).unwrap();
        collection.get(1);
    }
}
