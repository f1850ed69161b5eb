//! Function-run execution.

use super::config::FunctionRunConfig;
use super::types::{DimensionReport, FunctionReport, SearchOutcome, SkippedRun};
use crate::error::{BenchError, Result};
use crate::oracle::FunctionRegistry;
use crate::random::RandomSampler;
use crate::ranking::{sort_values, ScoredBatch};
use crate::search::{SampleSpace, SearchConfig, SearchRunner};
use crate::stats::AggregateStats;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes function-runs.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Executes one function-run.
    ///
    /// Timing covers the scoring of the raw sample (not its ranking) and
    /// each search (not the sort of the iterative history).
    ///
    /// # Errors
    ///
    /// Invalid run or search configuration, or an unregistered function ID.
    pub fn run_function(
        config: &FunctionRunConfig,
        search: &SearchConfig,
        registry: &FunctionRegistry,
        sampler: &mut RandomSampler,
    ) -> Result<FunctionReport> {
        config.validate()?;
        search.validate()?;
        let function = registry.get(config.function_id)?;

        let matrix = sampler.generate(config.samples, config.dimensions, config.min, config.max)?;
        let start = Instant::now();
        let batch = ScoredBatch::score(matrix, function);
        let scoring_elapsed = start.elapsed();

        let batch = batch.ranked();
        let fitness = batch.fitness();
        let fitness_stats = AggregateStats::from_sorted(&fitness, scoring_elapsed)?;
        let seed = batch.best().ok_or(BenchError::EmptySample)?;

        tracing::debug!(
            function = function.name(),
            dimensions = config.dimensions,
            best = seed.fitness,
            "sample scored"
        );

        let space = SampleSpace::new(config.samples, config.dimensions, config.min, config.max);
        let start = Instant::now();
        let blind = SearchRunner::blind_search(
            function,
            &seed.vector,
            seed.fitness,
            &space,
            search.iterations,
            sampler,
        )?;
        let blind_elapsed = start.elapsed();

        let start = Instant::now();
        let local = SearchRunner::local_search(function, &seed.vector, search)?;
        let local_elapsed = start.elapsed();

        let start = Instant::now();
        let iterative = SearchRunner::iterative_local_search(function, &seed.vector, search)?;
        let iterative_elapsed = start.elapsed();

        let mut history = iterative.history;
        sort_values(&mut history);

        let blind_stats = AggregateStats::from_scalar(blind.best_fitness, blind_elapsed);
        let local_stats = AggregateStats::from_scalar(local.best_fitness, local_elapsed);
        let iterative_stats = if history.is_empty() {
            AggregateStats::from_scalar(iterative.best_fitness, iterative_elapsed)
        } else {
            AggregateStats::from_sorted(&history, iterative_elapsed)?
        };

        Ok(FunctionReport {
            function_id: config.function_id,
            function_name: function.name().to_string(),
            file_stem: function.file_stem(),
            dimensions: config.dimensions,
            batch,
            outcome: SearchOutcome {
                blind_fitness: blind.best_fitness,
                blind_elapsed,
                local_fitness: local.best_fitness,
                local_elapsed,
                local_converged: local.converged,
                iterative_history: history,
                iterative_elapsed,
            },
            fitness_stats,
            blind_stats,
            local_stats,
            iterative_stats,
        })
    }

    /// Executes every run of `runs` at `dimensions`.
    ///
    /// Each run's dimensionality is overridden with `dimensions`. The run at
    /// index `i` samples from `RandomSampler::for_run(base_seed, dimensions, i)`.
    /// Failed runs are logged and recorded in [`DimensionReport::skipped`];
    /// the remaining runs still execute.
    pub fn run_dimension(
        dimensions: usize,
        runs: &[FunctionRunConfig],
        search: &SearchConfig,
        registry: &FunctionRegistry,
        base_seed: u64,
    ) -> DimensionReport {
        let execute = |(index, run): (usize, &FunctionRunConfig)| {
            let config = run.clone().with_dimensions(dimensions);
            let mut sampler = RandomSampler::for_run(base_seed, dimensions, index);
            (
                config.function_id,
                Self::run_function(&config, search, registry, &mut sampler),
            )
        };

        #[cfg(feature = "parallel")]
        let results: Vec<_> = runs.par_iter().enumerate().map(execute).collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = runs.iter().enumerate().map(execute).collect();

        let mut report = DimensionReport::new(dimensions);
        for (function_id, result) in results {
            match result {
                Ok(function_report) => report.reports.push(function_report),
                Err(error) => {
                    tracing::warn!(function_id, dimensions, %error, "skipping function run");
                    report.skipped.push(SkippedRun { function_id, error });
                }
            }
        }

        tracing::info!(
            dimensions,
            completed = report.reports.len(),
            skipped = report.skipped.len(),
            "dimension finished"
        );
        report
    }
}
