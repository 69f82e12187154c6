//! Report module: formats per-strategy timings for the console.
//!
//! The stdout format is fixed:
//!
//! ```text
//! Benchmarking string with size 10:
//!
//! Vec (any): 41 ms
//! Vec (for in): 39 ms
//! Vec (for index): 40 ms
//! HashMap: 118 ms
//! ```

use crate::search::Strategy;
use lookup_core::KeyType;
use std::fmt;
use std::time::Duration;

/// Total time spent by one strategy across all timed iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyTiming {
    pub strategy: Strategy,
    pub elapsed: Duration,
    /// Number of timed lookups (`iterations * size`).
    pub lookups: u64,
}

impl StrategyTiming {
    /// Whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Mean cost of a single lookup in nanoseconds.
    pub fn ns_per_lookup(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e9 / self.lookups as f64
    }
}

impl fmt::Display for StrategyTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.strategy.name(), self.elapsed_ms())
    }
}

/// Results of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    pub key_type: KeyType,
    pub size: usize,
    pub iterations: u32,
    /// One entry per strategy, in [`Strategy::ALL`] order.
    pub timings: Vec<StrategyTiming>,
}

impl BenchReport {
    pub fn header(&self) -> String {
        format!("Benchmarking {} with size {}:", self.key_type, self.size)
    }

    pub fn timing(&self, strategy: Strategy) -> Option<&StrategyTiming> {
        self.timings.iter().find(|t| t.strategy == strategy)
    }

    pub fn fastest(&self) -> Option<&StrategyTiming> {
        self.timings.iter().min_by_key(|t| t.elapsed)
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f)?;
        for timing in &self.timings {
            writeln!(f, "{timing}")?;
        }
        Ok(())
    }
}

/// Print the report to stdout.
pub fn print_report(report: &BenchReport) {
    print!("{report}");
}

/// Log the per-lookup breakdown, keeping stdout to the fixed report lines.
pub fn log_summary(report: &BenchReport) {
    for timing in &report.timings {
        log::info!(
            "{:16} {:>10.2} ns/lookup over {} lookups",
            timing.strategy.name(),
            timing.ns_per_lookup(),
            timing.lookups
        );
    }
    if let Some(best) = report.fastest() {
        log::info!("Fastest: {}", best.strategy.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BenchReport {
        let ms = [41, 39, 40, 118];
        BenchReport {
            key_type: KeyType::String,
            size: 10,
            iterations: 1_000_000,
            timings: Strategy::ALL
                .iter()
                .zip(ms)
                .map(|(&strategy, ms)| StrategyTiming {
                    strategy,
                    elapsed: Duration::from_micros(ms * 1000 + 999),
                    lookups: 10_000_000,
                })
                .collect(),
        }
    }

    #[test]
    fn renders_header_blank_line_and_one_line_per_strategy() {
        let rendered = sample_report().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Benchmarking string with size 10:",
                "",
                "Vec (any): 41 ms",
                "Vec (for in): 39 ms",
                "Vec (for index): 40 ms",
                "HashMap: 118 ms",
            ]
        );
    }

    #[test]
    fn fastest_picks_smallest_elapsed() {
        let report = sample_report();
        assert_eq!(report.fastest().unwrap().strategy, Strategy::ForEach);
        assert_eq!(report.timing(Strategy::HashLookup).unwrap().elapsed_ms(), 118);
    }

    #[test]
    fn ns_per_lookup_handles_zero_lookups() {
        let timing = StrategyTiming {
            strategy: Strategy::Declarative,
            elapsed: Duration::from_millis(5),
            lookups: 0,
        };
        assert_eq!(timing.ns_per_lookup(), 0.0);

        let timing = StrategyTiming {
            lookups: 1_000,
            ..timing
        };
        assert!((timing.ns_per_lookup() - 5_000.0).abs() < 1e-6);
    }
}
