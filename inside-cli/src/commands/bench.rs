//! Command to benchmark containment checks.
//!
//! Runs a fixed set of scenarios through one checker built from the current
//! configuration, then reports the cache settings and counters.

use crate::error::CliError;
use crate::utils::{build_checker, group_thousands, GlobalOptions};
use clap::{Args, ValueEnum};
use inside::path::PathResolver;
use inside::{CacheStats, ContainmentChecker};
use serde::Serialize;
use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 50;

/// A named pair of arguments to time.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Human-readable title.
    pub title: &'static str,
    /// Child argument.
    pub child: &'static str,
    /// Parent argument.
    pub parent: &'static str,
}

/// The benchmark scenarios, in report order.
pub const SCENARIOS: [Scenario; 7] = [
    Scenario {
        title: "Relative paths (common case)",
        child: "a/b/c",
        parent: "a",
    },
    Scenario {
        title: "Absolute paths",
        child: "/a/b/c",
        parent: "/a",
    },
    Scenario {
        title: "Same path",
        child: "/a/b",
        parent: "/a/b",
    },
    Scenario {
        title: "Outside parent",
        child: "/x/y",
        parent: "/a/b",
    },
    Scenario {
        title: "Cached paths (repeated same paths)",
        child: "some/nested/path/file.txt",
        parent: "some/nested",
    },
    Scenario {
        title: "Mixed absolute and relative",
        child: "./a/b/c",
        parent: "/tmp",
    },
    Scenario {
        title: "Complex relative paths",
        child: "a/../b/c",
        parent: ".",
    },
];

/// Output format for bench command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BenchFormat {
    /// Human-readable report
    Human,
    /// JSON document
    Json,
}

/// Measure containment checks across common scenarios.
#[derive(Args)]
pub struct BenchCommand {
    /// Calls per scenario
    #[arg(
        long,
        value_name = "N",
        default_value_t = 100_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub iterations: u64,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: BenchFormat,
}

/// Timing for one scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioResult {
    /// Scenario title.
    pub title: &'static str,
    /// Child argument.
    pub child: &'static str,
    /// Parent argument.
    pub parent: &'static str,
    /// What the check returned.
    pub inside: bool,
    /// Wall time for all iterations, in milliseconds.
    pub duration_ms: f64,
    /// Calls per second.
    pub ops_per_sec: u64,
}

/// Cache settings and counters after the run.
#[derive(Debug, Serialize)]
pub struct CacheReport {
    /// Maximum number of entries.
    pub capacity: usize,
    /// Eviction policy name.
    pub policy: String,
    /// Entries held at the end of the run.
    pub entries: usize,
    /// Hit, miss and eviction counters.
    pub stats: CacheStats,
}

/// A complete benchmark report.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    /// Calls per scenario.
    pub iterations: u64,
    /// Per-scenario timings.
    pub scenarios: Vec<ScenarioResult>,
    /// Cache state after the run.
    pub cache: CacheReport,
}

impl BenchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut checker = build_checker(global)?;
        log::debug!(
            "running {} scenarios with {} iterations each",
            SCENARIOS.len(),
            self.iterations
        );

        let report = run(&mut checker, self.iterations);

        match self.format {
            BenchFormat::Human => print_human(&report),
            BenchFormat::Json => print_json(&report),
        }
    }
}

/// Run every scenario against `checker`.
pub fn run<R: PathResolver>(checker: &mut ContainmentChecker<R>, iterations: u64) -> BenchReport {
    let scenarios = SCENARIOS
        .iter()
        .map(|scenario| {
            let inside = checker.is_inside(scenario.child, scenario.parent);

            let start = Instant::now();
            for _ in 0..iterations {
                black_box(checker.is_inside(black_box(scenario.child), black_box(scenario.parent)));
            }
            let elapsed = start.elapsed();

            ScenarioResult {
                title: scenario.title,
                child: scenario.child,
                parent: scenario.parent,
                inside,
                duration_ms: elapsed.as_secs_f64() * 1000.0,
                ops_per_sec: ops_per_sec(iterations, elapsed),
            }
        })
        .collect();

    let cache = checker.cache();
    BenchReport {
        iterations,
        scenarios,
        cache: CacheReport {
            capacity: cache.capacity(),
            policy: cache.policy().to_string(),
            entries: cache.len(),
            stats: cache.stats(),
        },
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn ops_per_sec(iterations: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (iterations as f64 / secs) as u64
    } else {
        0
    }
}

fn print_human(report: &BenchReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "Containment Benchmarks")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Iterations per scenario: {}", group_thousands(report.iterations))?;

    for (i, result) in report.scenarios.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. {}:", i + 1, result.title)?;
        writeln!(
            out,
            "  is_inside({:?}, {:?}) = {}: {:.2}ms ({} ops/sec)",
            result.child,
            result.parent,
            result.inside,
            result.duration_ms,
            group_thousands(result.ops_per_sec)
        )?;
    }

    let cache = &report.cache;
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "Cache statistics:")?;
    writeln!(out, "- Max cache size: {} entries", group_thousands(cache.capacity as u64))?;
    writeln!(out, "- Eviction policy: {}", cache.policy)?;
    writeln!(out, "- Entries in use: {}", cache.entries)?;
    writeln!(
        out,
        "- Hits: {}, misses: {}, evictions: {}",
        group_thousands(cache.stats.hits),
        group_thousands(cache.stats.misses),
        group_thousands(cache.stats.evictions)
    )?;
    writeln!(out, "- Hit rate: {:.2}%", cache.stats.hit_rate() * 100.0)?;

    Ok(())
}

fn print_json(report: &BenchReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, report)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;

    writeln!(handle)?;

    Ok(())
}
