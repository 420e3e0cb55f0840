use clap::ValueEnum;
use wide::u64x4;

use crate::{Distance, Symbol};

// Symbols packed into one u64x4: 4 lanes of 8 bytes
const BLOCK_SYMBOLS: usize = 32;
const LANE_SYMBOLS: usize = 8;
const LOW_SEVEN: u64 = 0x7f7f_7f7f_7f7f_7f7f;
const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

// How a single pair of sequences is compared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Kernel {
    // One symbol at a time
    #[default]
    Scalar,
    // 32 symbols at a time in SIMD lanes, scalar tail
    Wide,
}

impl Kernel {
    #[inline]
    pub fn distance(self, a: &[Symbol], b: &[Symbol]) -> Distance {
        match self {
            Kernel::Scalar => hamming(a, b),
            Kernel::Wide => hamming_wide(a, b),
        }
    }
}

// Count positions where the two sequences differ
pub fn hamming(a: &[Symbol], b: &[Symbol]) -> Distance {
    debug_assert_eq!(a.len(), b.len());
    let mut distance = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            distance += 1;
        }
    }
    distance
}

// Same result as `hamming`, but XORs whole blocks and counts the non-zero bytes
pub fn hamming_wide(a: &[Symbol], b: &[Symbol]) -> Distance {
    debug_assert_eq!(a.len(), b.len());
    let a_blocks = a.chunks_exact(BLOCK_SYMBOLS);
    let b_blocks = b.chunks_exact(BLOCK_SYMBOLS);
    let tail = hamming(a_blocks.remainder(), b_blocks.remainder());

    let low_seven = u64x4::from([LOW_SEVEN; 4]);
    let high_bits = u64x4::from([HIGH_BITS; 4]);
    a_blocks
        .zip(b_blocks)
        .map(|(x, y)| {
            let diff = pack(x) ^ pack(y);
            // Sets the high bit of every byte that has any bit set.
            // No byte can carry into its neighbour: 0x7f + 0x7f = 0xfe.
            let nonzero = (((diff & low_seven) + low_seven) | diff) & high_bits;
            count_ones(nonzero)
        })
        .sum::<Distance>()
        + tail
}

#[inline]
fn pack(block: &[Symbol]) -> u64x4 {
    let lanes: [u64; 4] = array_init::array_init(|lane| {
        let bytes = &block[lane * LANE_SYMBOLS..(lane + 1) * LANE_SYMBOLS];
        u64::from_ne_bytes(array_init::array_init(|i| bytes[i]))
    });
    u64x4::from(lanes)
}

#[inline]
fn count_ones(x: u64x4) -> Distance {
    let lanes: &[u64; 4] = x.as_array_ref();
    lanes.iter().map(|lane| lane.count_ones()).sum()
}
