//! Benchmark driver: builds the dataset and lookup structures once, then
//! times every strategy over the configured number of iterations.

use crate::config::BenchConfig;
use crate::error::LookupError;
use crate::report::{BenchReport, StrategyTiming};
use crate::search::{self, Lookup, Strategy};
use lookup_core::{ById, ByIndex, ByText, Dataset, KeySelector, KeyType};
use std::fmt::Debug;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run one configuration end to end.
pub fn run(config: &BenchConfig) -> Result<BenchReport, LookupError> {
    let dataset = match config.seed {
        Some(seed) => Dataset::generate_seeded(config.size, seed),
        None => Dataset::generate(config.size),
    };
    log::debug!("Generated {} records", dataset.len());

    run_on(config, &dataset)
}

/// Benchmark an existing dataset, searching on `config.key_type`.
pub fn run_on(config: &BenchConfig, dataset: &Dataset) -> Result<BenchReport, LookupError> {
    match config.key_type {
        KeyType::Int => bench_key::<ByIndex>(config, dataset),
        KeyType::String => bench_key::<ByText>(config, dataset),
        KeyType::Uuid => bench_key::<ById>(config, dataset),
    }
}

fn bench_key<S: KeySelector>(
    config: &BenchConfig,
    dataset: &Dataset,
) -> Result<BenchReport, LookupError> {
    let lookup = Lookup::<S>::new(dataset);
    let keys = dataset.keys::<S>();
    let records = lookup.records();
    let index = lookup.index();

    let mut timings = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        log::info!("Benchmarking {}...", strategy.name());

        // One closure per arm keeps each timed loop monomorphic.
        let elapsed = match strategy {
            Strategy::Declarative => time_strategy(strategy, config, &keys, |key| {
                search::scan_any::<S>(black_box(records), key)
            })?,
            Strategy::ForEach => time_strategy(strategy, config, &keys, |key| {
                search::scan_for::<S>(black_box(records), key)
            })?,
            Strategy::Indexed => time_strategy(strategy, config, &keys, |key| {
                search::scan_indexed::<S>(black_box(records), key)
            })?,
            Strategy::HashLookup => time_strategy(strategy, config, &keys, |key| {
                search::hash_lookup(black_box(index), key)
            })?,
        };

        let timing = StrategyTiming {
            strategy,
            elapsed,
            lookups: config.timed_lookups(),
        };
        log::debug!(
            "{} done in {:?} ({:.2} ns/lookup)",
            strategy.name(),
            elapsed,
            timing.ns_per_lookup()
        );
        timings.push(timing);
    }

    Ok(BenchReport {
        key_type: S::KEY_TYPE,
        size: dataset.len(),
        iterations: config.iterations,
        timings,
    })
}

/// Run the warmup, then time `config.iterations` passes over `keys`.
///
/// Any key `search` fails to find aborts with [`LookupError::KeyNotFound`].
pub fn time_strategy<K, F>(
    strategy: Strategy,
    config: &BenchConfig,
    keys: &[&K],
    search: F,
) -> Result<Duration, LookupError>
where
    K: Debug + ?Sized,
    F: Fn(&K) -> bool,
{
    run_iterations(strategy, config.warmup_iterations, keys, &search)?;

    let start = Instant::now();
    run_iterations(strategy, config.iterations, keys, &search)?;
    Ok(start.elapsed())
}

fn run_iterations<K, F>(
    strategy: Strategy,
    iterations: u32,
    keys: &[&K],
    search: &F,
) -> Result<(), LookupError>
where
    K: Debug + ?Sized,
    F: Fn(&K) -> bool,
{
    for _ in 0..iterations {
        for &key in keys {
            if !search(black_box(key)) {
                return Err(LookupError::KeyNotFound {
                    strategy: strategy.name(),
                    key: format!("{key:?}"),
                });
            }
        }
    }
    Ok(())
}
