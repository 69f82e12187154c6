//! Standalone benchmark runner that prints the timing report.
//!
//! Usage:
//!   cargo run --release -p lookup-bench
//!   cargo run --release -p lookup-bench -- --key-type int --size 100 --iterations 100000

use clap::Parser;
use lookup_bench::config::Args;
use lookup_bench::driver;
use lookup_bench::report::{log_summary, print_report};
use std::process;

fn main() {
    let args = Args::parse();

    let log_file = args.log_file.as_ref().map(|p| p.to_string_lossy().into_owned());
    if let Err(e) = lookup_core::initialize_logger(args.log_level, log_file.as_deref()) {
        eprintln!("Failed to initialize logger: {e:#}. Exiting.");
        process::exit(1);
    }

    let config = args.bench_config();
    log::info!(
        "Running lookup benchmark: key type {}, {} records, {} iterations ({} warmup)",
        config.key_type,
        config.size,
        config.iterations,
        config.warmup_iterations
    );

    match driver::run(&config) {
        Ok(report) => {
            print_report(&report);
            log_summary(&report);
        }
        Err(e) => {
            log::error!("Benchmark aborted: {e}");
            process::exit(1);
        }
    }
}
