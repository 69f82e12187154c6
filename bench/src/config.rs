//! Command-line configuration.

use clap::Parser;
use log::LevelFilter;
use lookup_core::constants::{
    DEFAULT_COLLECTION_SIZE, DEFAULT_ITERATIONS, DEFAULT_KEY_TYPE, DEFAULT_WARMUP_ITERATIONS,
};
use lookup_core::KeyType;
use std::path::PathBuf;

/// Compare key lookups in a Vec (three scan styles) against a HashMap.
#[derive(Debug, Parser)]
#[command(name = "lookup-bench", version, about)]
pub struct Args {
    /// Record field to search on. opts: (int, string, uuid)
    #[arg(long, default_value_t = DEFAULT_KEY_TYPE)]
    pub key_type: KeyType,

    /// Number of records in the dataset.
    #[arg(long, default_value_t = DEFAULT_COLLECTION_SIZE)]
    pub size: usize,

    /// Timed iterations per strategy; each iteration looks up every key once.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Untimed iterations per strategy before measuring.
    #[arg(long, default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    pub warmup: u32,

    /// Seed for the identifier generator, for reproducible datasets.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level for stderr. opts: (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Also append log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            key_type: self.key_type,
            size: self.size,
            iterations: self.iterations,
            warmup_iterations: self.warmup,
            seed: self.seed,
        }
    }
}

/// Everything the driver needs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub key_type: KeyType,
    pub size: usize,
    pub iterations: u32,
    pub warmup_iterations: u32,
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            key_type: DEFAULT_KEY_TYPE,
            size: DEFAULT_COLLECTION_SIZE,
            iterations: DEFAULT_ITERATIONS,
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Lookups performed by one strategy in the timed phase.
    pub fn timed_lookups(&self) -> u64 {
        self.iterations as u64 * self.size as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bench_config_default() {
        let args = Args::try_parse_from(["lookup-bench"]).unwrap();
        assert_eq!(args.bench_config(), BenchConfig::default());
        assert_eq!(args.log_level, LevelFilter::Info);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "lookup-bench",
            "--key-type",
            "guid",
            "--size",
            "1000",
            "--iterations",
            "50",
            "--warmup",
            "5",
            "--seed",
            "42",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = args.bench_config();
        assert_eq!(config.key_type, KeyType::Uuid);
        assert_eq!(config.size, 1000);
        assert_eq!(config.iterations, 50);
        assert_eq!(config.warmup_iterations, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timed_lookups(), 50_000);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_key_type() {
        assert!(Args::try_parse_from(["lookup-bench", "--key-type", "float"]).is_err());
    }
}
