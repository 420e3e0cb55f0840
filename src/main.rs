use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::info;

use par_hamming::bench::{run_bench, write_csv};
use par_hamming::config::RunConfig;
use par_hamming::kernel::Kernel;
use par_hamming::timing::{millis, timed};
use par_hamming::variants::Variant;
use par_hamming::verify::verify_workload;
use par_hamming::Result;

/// All-pairs Hamming distance between two generated collections of strings
#[derive(Parser)]
#[command(name = "par_hamming")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for the string generator
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// How each pair of strings is compared
    #[arg(long, global = true, value_enum, default_value_t = Kernel::Scalar)]
    kernel: Kernel,

    /// Recompute serially after the timed run and fail on any difference
    #[arg(long, global = true)]
    verify: bool,
}

// Zero values parse fine here and are rejected by RunConfig::validate
#[derive(Args)]
struct Sizes {
    /// Number of strings in collection A
    m: usize,
    /// Number of strings in collection B
    n: usize,
    /// Length of every string
    l: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Single-threaded baseline
    Serial {
        #[command(flatten)]
        sizes: Sizes,
    },
    /// Explicit worker pool, one block of rows per worker
    Pool {
        #[command(flatten)]
        sizes: Sizes,
        /// Number of workers, the main thread included
        threads: usize,
    },
    /// Parallel loop over the collapsed (row, column) pair space
    ParallelLoop {
        #[command(flatten)]
        sizes: Sizes,
        /// Number of threads in the loop's pool
        threads: usize,
    },
    /// Run all three variants on one workload and print a CSV timing table
    Bench {
        #[command(flatten)]
        sizes: Sizes,
        /// Threads for the two parallel variants
        threads: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let (variant, sizes, threads) = match cli.command {
        Command::Serial { sizes } => (Variant::Serial, sizes, 1),
        Command::Pool { sizes, threads } => (Variant::Pool, sizes, threads),
        Command::ParallelLoop { sizes, threads } => (Variant::ParallelLoop, sizes, threads),
        Command::Bench { sizes, threads } => {
            let config = RunConfig::new(sizes.m, sizes.n, sizes.l, threads)
                .with_seed(cli.seed)
                .with_kernel(cli.kernel);
            let rows = run_bench(&config)?;
            return write_csv(&rows, io::stdout().lock());
        }
    };

    let config = RunConfig::new(sizes.m, sizes.n, sizes.l, threads)
        .with_seed(cli.seed)
        .with_kernel(cli.kernel);
    info!(
        "{}: m={} n={} l={} threads={} seed={} kernel={:?}",
        variant.name(),
        config.rows,
        config.cols,
        config.length,
        config.threads,
        config.seed,
        config.kernel
    );

    // Generation and allocation stay outside the timed phase
    let mut workload = config.workload()?;

    println!("\n{}", variant.header());
    let (total, elapsed) = timed(|| variant.run(&mut workload, config.threads, config.kernel));
    let total = total?;
    println!("Total time: {:.3} ms", millis(elapsed));
    println!("Total hamming distance: {}", total);

    if cli.verify {
        verify_workload(&workload, total, config.kernel)?;
        info!("Matrix and total match the serial baseline");
    }
    Ok(())
}
