//! Function-run and dimension reports.

use crate::error::BenchError;
use crate::ranking::ScoredBatch;
use crate::stats::AggregateStats;
use std::time::Duration;

/// Raw results of the three searches of one function-run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub blind_fitness: f64,
    pub blind_elapsed: Duration,
    pub local_fitness: f64,
    pub local_elapsed: Duration,
    /// Whether local search stopped on its own rather than at the step limit.
    pub local_converged: bool,
    /// Iterative local search best-so-far values, sorted ascending.
    pub iterative_history: Vec<f64>,
    pub iterative_elapsed: Duration,
}

/// Everything one function-run produces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionReport {
    pub function_id: i64,
    pub function_name: String,
    /// File-name-safe form of the function name.
    pub file_stem: String,
    pub dimensions: usize,
    /// The sampled candidates, ranked by fitness.
    pub batch: ScoredBatch,
    pub outcome: SearchOutcome,
    /// Statistics of the raw sample; elapsed covers its scoring only.
    pub fitness_stats: AggregateStats,
    pub blind_stats: AggregateStats,
    pub local_stats: AggregateStats,
    pub iterative_stats: AggregateStats,
}

impl FunctionReport {
    /// Per-algorithm statistics in report column order.
    pub fn search_stats(&self) -> [&AggregateStats; 3] {
        [&self.blind_stats, &self.local_stats, &self.iterative_stats]
    }
}

/// A function-run that was not executed.
#[derive(Debug)]
pub struct SkippedRun {
    pub function_id: i64,
    pub error: BenchError,
}

/// Reports of every function-run for one dimensionality.
#[derive(Debug, Default)]
pub struct DimensionReport {
    pub dimensions: usize,
    /// Completed runs, in input order.
    pub reports: Vec<FunctionReport>,
    /// Failed runs, in input order.
    pub skipped: Vec<SkippedRun>,
}

impl DimensionReport {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
