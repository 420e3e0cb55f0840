pub mod bench;
mod buffer;
pub mod collection;
pub mod config;
pub mod error;
pub mod generator;
pub mod kernel;
pub mod matrix;
pub mod partition;
pub mod reduce;
pub mod store;
pub mod timing;
pub mod variants;
pub mod verify;
pub mod worker;

pub use error::{HammingError, Result};

pub type Symbol = u8;
pub type Distance = u32;
