use std::time::Instant;

use clap::Parser;
use log::info;
use percolation::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Estimates the percolation threshold of an n-by-n lattice by Monte Carlo
/// simulation.
#[derive(Parser)]
struct Args {
    /// Grid side length.
    n: usize,

    /// Number of independent trials.
    trials: usize,

    /// Seed for the random generator; uses thread-local entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log run milestones to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    info!(
        "running {} trials on a {}x{} grid",
        args.trials, args.n, args.n
    );

    let started = Instant::now();
    let outcome = match args.seed {
        Some(seed) => {
            PercolationStats::run_with(args.n, args.trials, &mut StdRng::seed_from_u64(seed))
        }
        None => PercolationStats::run(args.n, args.trials),
    };
    let elapsed = started.elapsed();

    match outcome {
        Ok(stats) => {
            info!("finished in {:.3}s", elapsed.as_secs_f64());
            println!("mean            = {:.6}", stats.mean());
            println!("stddev          = {:.6}", stats.stddev());
            println!("confidence low  = {:.6}", stats.confidence_low());
            println!("confidence high = {:.6}", stats.confidence_high());
            println!("elapsed time    = {:.3}s", elapsed.as_secs_f64());
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
