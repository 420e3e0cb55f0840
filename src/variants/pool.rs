use std::io;
use std::thread;

use log::{debug, warn};

use crate::config::check_threads;
use crate::error::{HammingError, Result};
use crate::kernel::Kernel;
use crate::partition::{block_range, busy_workers};
use crate::reduce::TotalDiff;
use crate::store::Workload;
use crate::worker::compute_rows;

// Explicit worker pool over row blocks.
//
// Workers 1..threads run on their own scoped threads; worker 0 runs on the
// calling thread. Each worker owns a disjoint block of matrix rows, so the
// only shared write is the atomic merge of its partial sum.
pub fn run_pool(workload: &mut Workload, threads: usize, kernel: Kernel) -> Result<u64> {
    run_pool_with(workload, threads, kernel, &NoHooks)
}

// Points in a worker's lifecycle where the pool can be observed or made to fail
pub(crate) trait WorkerHooks: Sync {
    // On the calling thread, just before `worker` is started
    fn before_spawn(&self, _worker: usize) -> io::Result<()> {
        Ok(())
    }

    // On the worker's own thread, before and after its block
    fn on_start(&self, _worker: usize) {}
    fn on_finish(&self, _worker: usize) {}
}

struct NoHooks;

impl WorkerHooks for NoHooks {}

pub(crate) fn run_pool_with(
    workload: &mut Workload,
    threads: usize,
    kernel: Kernel,
    hooks: &impl WorkerHooks,
) -> Result<u64> {
    check_threads(threads)?;
    let (a, b, matrix) = workload.parts_mut();
    let (rows, cols) = (a.len(), b.len());

    let busy = busy_workers(rows, threads);
    if busy < threads {
        warn!(
            "{} of {} workers have no rows to process ({} rows)",
            threads - busy,
            threads,
            rows
        );
    }

    // Worker 0's block comes off the front; the rest is handed out as workers start
    let own_rows = block_range(rows, threads, 0);
    let (own_cells, mut rest) = matrix.as_mut_slice().split_at_mut(own_rows.len() * cols);
    let total = TotalDiff::new();

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads - 1);
        let mut spawn_error = None;
        for worker in 1..threads {
            // Cut this worker's rows off the unclaimed part of the matrix
            let worker_rows = block_range(rows, threads, worker);
            let (cells, tail) = std::mem::take(&mut rest).split_at_mut(worker_rows.len() * cols);
            rest = tail;

            let total = &total;
            let spawned = hooks.before_spawn(worker).and_then(|()| {
                thread::Builder::new()
                    .name(format!("hamming-worker-{}", worker))
                    .spawn_scoped(scope, move || {
                        hooks.on_start(worker);
                        debug!("Worker {} processing rows {:?}", worker, worker_rows);
                        let partial = compute_rows(a, b, worker_rows, cells, kernel);
                        total.merge(partial);
                        debug!("Worker {} merged partial sum {}", worker, partial);
                        hooks.on_finish(worker);
                    })
            });
            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(source) => {
                    // Stop starting workers; the ones already running are joined below
                    spawn_error = Some(HammingError::WorkerSpawn { worker, source });
                    break;
                }
            }
        }

        // The calling thread takes worker 0's share, unless the run is already lost
        if spawn_error.is_none() {
            hooks.on_start(0);
            debug!("Worker 0 processing rows {:?}", own_rows);
            let partial = compute_rows(a, b, own_rows, own_cells, kernel);
            total.merge(partial);
            debug!("Worker 0 merged partial sum {}", partial);
            hooks.on_finish(0);
        }

        // Join everything that started, even after a failure, so no worker outlives the run
        let mut first_error = spawn_error;
        for (worker, handle) in handles {
            if handle.join().is_err() && first_error.is_none() {
                first_error = Some(HammingError::WorkerPanicked { worker });
            }
        }
        first_error.map_or(Ok(()), Err)
    })?;

    Ok(total.into_inner())
}
