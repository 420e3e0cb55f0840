// Error type shared by every part of the crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HammingError {
    /// A size or thread count was zero
    #[error("Invalid {name}: {value} (must be at least 1)")]
    InvalidSize { name: &'static str, value: usize },

    /// More workers than the pool drivers will start
    #[error("Too many threads: {requested} (at most {max})")]
    TooManyThreads { requested: usize, max: usize },

    /// Buffer could not be allocated, or its length overflowed `usize`
    #[error("Failed to allocate {what} ({elements} elements)")]
    Allocation { what: &'static str, elements: usize },

    /// Collections that should share a sequence length don't
    #[error("Length mismatch: {message}")]
    LengthMismatch { message: String },

    /// The OS refused to start a worker thread
    #[error("Failed to start worker {worker}: {source}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker panicked before merging its partial sum
    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A parallel result disagreed with the serial baseline
    #[error("Result mismatch: {message}")]
    Mismatch { message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HammingError>;

impl HammingError {
    pub fn invalid_size(name: &'static str, value: usize) -> Self {
        Self::InvalidSize { name, value }
    }

    pub fn allocation(what: &'static str, elements: usize) -> Self {
        Self::Allocation { what, elements }
    }

    pub fn length_mismatch(message: impl Into<String>) -> Self {
        Self::LengthMismatch {
            message: message.into(),
        }
    }

    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::Mismatch {
            message: message.into(),
        }
    }
}
