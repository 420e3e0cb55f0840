// The three ways of filling the distance matrix

mod serial;
pub use serial::{run_serial, serial_matrix};

mod pool;
pub use pool::run_pool;

mod parallel_loop;
pub use parallel_loop::run_parallel_loop;

use crate::error::Result;
use crate::kernel::Kernel;
use crate::store::Workload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Serial,
    Pool,
    ParallelLoop,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Serial, Variant::Pool, Variant::ParallelLoop];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Serial => "serial",
            Variant::Pool => "pool",
            Variant::ParallelLoop => "parallel-loop",
        }
    }

    // First line of the report
    pub fn header(self) -> &'static str {
        match self {
            Variant::Serial => "Serial algorithm starts.",
            Variant::Pool => "Task size: 1 line.",
            Variant::ParallelLoop => "Task size: 1 string.",
        }
    }

    // Fill the workload's matrix and return the total. `threads` is ignored by the serial variant.
    pub fn run(self, workload: &mut Workload, threads: usize, kernel: Kernel) -> Result<u64> {
        match self {
            Variant::Serial => Ok(run_serial(workload, kernel)),
            Variant::Pool => run_pool(workload, threads, kernel),
            Variant::ParallelLoop => run_parallel_loop(workload, threads, kernel),
        }
    }
}
