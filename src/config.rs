// Run parameters shared by every variant.
// The CLI fills a `RunConfig`; library callers can build one directly.
// Either way, `validate` runs before anything is allocated.

use crate::error::{HammingError, Result};
use crate::kernel::Kernel;
use crate::store::Workload;

// Upper bound on workers for both parallel variants. Per-worker bookkeeping
// scales with this, so it must stay far below anything that could exhaust memory.
pub const MAX_THREADS: usize = 4096;

// Worker counts must be in 1..=MAX_THREADS
pub fn check_threads(threads: usize) -> Result<()> {
    if threads == 0 {
        return Err(HammingError::invalid_size("threads", threads));
    }
    if threads > MAX_THREADS {
        return Err(HammingError::TooManyThreads {
            requested: threads,
            max: MAX_THREADS,
        });
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of sequences in collection A (m)
    pub rows: usize,
    /// Number of sequences in collection B (n)
    pub cols: usize,
    /// Length of every sequence (l)
    pub length: usize,
    /// Worker count (T); 1 for the serial variant
    pub threads: usize,
    /// Seed for the sequence generator
    pub seed: u64,
    pub kernel: Kernel,
}

impl RunConfig {
    pub fn new(rows: usize, cols: usize, length: usize, threads: usize) -> Self {
        RunConfig {
            rows,
            cols,
            length,
            threads,
            seed: 0,
            kernel: Kernel::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Reject zero sizes and out-of-range worker counts
    pub fn validate(&self) -> Result<()> {
        let checks = [("m", self.rows), ("n", self.cols), ("l", self.length)];
        for (name, value) in checks {
            if value == 0 {
                return Err(HammingError::invalid_size(name, value));
            }
        }
        check_threads(self.threads)
    }

    /// Validate, then generate the collections and an empty matrix
    pub fn workload(&self) -> Result<Workload> {
        self.validate()?;
        Workload::generate(self.rows, self.cols, self.length, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(RunConfig::new(1, 1, 1, 1).validate().is_ok());
        for (config, name) in [
            (RunConfig::new(0, 1, 1, 1), "m"),
            (RunConfig::new(1, 0, 1, 1), "n"),
            (RunConfig::new(1, 1, 0, 1), "l"),
            (RunConfig::new(1, 1, 1, 0), "threads"),
        ] {
            match config.validate() {
                Err(HammingError::InvalidSize { name: got, value: 0 }) => assert_eq!(got, name),
                other => panic!("expected InvalidSize for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_invalid_config_allocates_nothing() {
        // A matrix this large would fail to allocate; validation must fail first
        let config = RunConfig::new(usize::MAX, usize::MAX, 0, 1);
        assert!(matches!(
            config.workload(),
            Err(HammingError::InvalidSize { name: "l", .. })
        ));
    }

    #[test]
    fn test_thread_limit() {
        assert!(check_threads(MAX_THREADS).is_ok());
        assert!(matches!(
            RunConfig::new(1, 1, 1, MAX_THREADS + 1).validate(),
            Err(HammingError::TooManyThreads { requested, max: MAX_THREADS })
                if requested == MAX_THREADS + 1
        ));
        assert!(matches!(
            RunConfig::new(1, 1, 1, usize::MAX).workload(),
            Err(HammingError::TooManyThreads { .. })
        ));
    }

    #[test]
    fn test_builders() {
        let config = RunConfig::new(2, 3, 4, 5).with_seed(9).with_kernel(Kernel::Wide);
        assert_eq!(config.seed, 9);
        assert_eq!(config.kernel, Kernel::Wide);
        assert_eq!(config.workload().unwrap().matrix().cols(), 3);
    }
}
