use std::sync::atomic::{AtomicU64, Ordering};

// The grand total across all workers.
// Each worker merges its partial sum exactly once; merge order doesn't matter.
#[derive(Debug, Default)]
pub struct TotalDiff(AtomicU64);

impl TotalDiff {
    pub fn new() -> Self {
        Self::default()
    }

    // Atomically add one worker's partial sum
    #[inline]
    pub fn merge(&self, partial: u64) {
        self.0.fetch_add(partial, Ordering::SeqCst);
    }

    // Only meaningful once every worker has merged (after the join)
    pub fn load(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    pub fn into_inner(self) -> u64 {
        self.0.into_inner()
    }
}
