//! Function-run orchestration.
//!
//! One *function-run* samples `N` random candidates of dimension `D` within
//! the bounds of one benchmark function, scores and ranks them, then seeds
//! blind, local and iterative local search from the best sample. Every
//! phase is timed and summarized into a [`FunctionReport`].
//!
//! [`BenchmarkRunner::run_dimension`] executes a list of function-runs for
//! one dimensionality, skipping (and logging) entries that fail. With the
//! `parallel` feature the runs of one dimension execute on the rayon pool;
//! each run draws from its own sampler, seeded from the base seed, the
//! dimensionality and the run index, so results do not depend on the
//! feature.

mod config;
mod runner;
mod types;

pub use config::FunctionRunConfig;
pub use runner::BenchmarkRunner;
pub use types::{DimensionReport, FunctionReport, SearchOutcome, SkippedRun};
