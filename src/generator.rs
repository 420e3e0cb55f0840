use std::fmt;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::Symbol;

// Symbols drawn by the generator
pub const ALPHABET: &[Symbol] = b"0123456789";

// A single fixed-length string of symbols
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    pub fn as_symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Sequence(s.as_bytes().to_vec())
    }
}

impl AsRef<[Symbol]> for Sequence {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

// Generates one sequence from its own seeded RNG
pub fn generate(length: usize, seed: u64) -> Sequence {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_sequence(length, &mut rng)
}

pub fn random_sequence(length: usize, rng: &mut impl Rng) -> Sequence {
    let mut symbols = vec![0; length];
    fill_random(&mut symbols, rng);
    Sequence(symbols)
}

// Overwrites every symbol with an independent uniform draw from the alphabet
pub fn fill_random(dest: &mut [Symbol], rng: &mut impl Rng) {
    dest.iter_mut()
        .for_each(|symbol| *symbol = ALPHABET[rng.gen_range(0..ALPHABET.len())]);
}
