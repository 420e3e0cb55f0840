// Side-by-side timing of all three variants on one generated workload.
// Every variant fills a cleared matrix over the same collections, and each
// result is checked against the serial run before it is reported.

use std::io;

use log::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::store::Workload;
use crate::timing::{millis, timed};
use crate::variants::Variant;
use crate::verify::check_matches;

#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    pub variant: &'static str,
    pub threads: usize,
    pub millis: f64,
    pub total: u64,
    /// Serial time divided by this variant's time
    pub speedup: f64,
}

pub fn run_bench(config: &RunConfig) -> Result<Vec<BenchRow>> {
    let mut workload = config.workload()?;

    let (serial_total, serial_millis) = run_variant(&mut workload, Variant::Serial, 1, config)?;
    let expected = workload.matrix().clone();
    let mut rows = vec![BenchRow {
        variant: Variant::Serial.name(),
        threads: 1,
        millis: serial_millis,
        total: serial_total,
        speedup: 1.0,
    }];

    for variant in [Variant::Pool, Variant::ParallelLoop] {
        let (total, elapsed) = run_variant(&mut workload, variant, config.threads, config)?;
        check_matches(&expected, serial_total, workload.matrix(), total)?;
        rows.push(BenchRow {
            variant: variant.name(),
            threads: config.threads,
            millis: elapsed,
            total,
            speedup: if elapsed > 0.0 {
                serial_millis / elapsed
            } else {
                1.0
            },
        });
    }
    Ok(rows)
}

// Clear the matrix, then time one variant filling it
fn run_variant(
    workload: &mut Workload,
    variant: Variant,
    threads: usize,
    config: &RunConfig,
) -> Result<(u64, f64)> {
    workload.reset();
    let (total, elapsed) = timed(|| variant.run(workload, threads, config.kernel));
    let total = total?;
    let elapsed = millis(elapsed);
    info!(
        "{} with {} thread(s) finished in {:.3} ms",
        variant.name(),
        threads,
        elapsed
    );
    Ok((total, elapsed))
}

// One header line, then one line per variant
pub fn write_csv<W: io::Write>(rows: &[BenchRow], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["variant", "threads", "millis", "total", "speedup"])?;
    for row in rows {
        writer.write_record([
            row.variant.to_string(),
            row.threads.to_string(),
            format!("{:.3}", row.millis),
            row.total.to_string(),
            format!("{:.2}", row.speedup),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_runs_every_variant() {
        let config = RunConfig::new(20, 15, 64, 3).with_seed(4);
        let rows = run_bench(&config).unwrap();
        let names: Vec<_> = rows.iter().map(|row| row.variant).collect();
        assert_eq!(names, ["serial", "pool", "parallel-loop"]);
        assert_eq!(rows[0].threads, 1);
        assert_eq!(rows[1].threads, 3);
        assert!(rows.iter().all(|row| row.total == rows[0].total));
        assert!(rows[0].total > 0);
    }

    #[test]
    fn test_bench_rejects_invalid_config() {
        assert!(run_bench(&RunConfig::new(0, 1, 1, 1)).is_err());
    }

    #[test]
    fn test_write_csv() {
        let rows = [BenchRow {
            variant: "pool",
            threads: 4,
            millis: 12.3456,
            total: 99,
            speedup: 3.5,
        }];
        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "variant,threads,millis,total,speedup\npool,4,12.346,99,3.50\n"
        );
    }
}
