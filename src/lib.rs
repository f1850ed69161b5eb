//! Benchmark-function fitness sampling and search comparison.
//!
//! Samples random candidates for a set of standard benchmark functions,
//! summarizes the fitness distribution, and compares three search
//! strategies seeded from the best sample:
//!
//! - **Blind search**: repeated uniform sampling, keeping the best.
//! - **Local search**: hill climbing over a deterministic finite-difference
//!   neighborhood until no neighbor improves.
//! - **Iterative local search**: repeated local refinement, recording the
//!   global best after every outer iteration.
//!
//! # Architecture
//!
//! - [`random`] draws candidate matrices, [`oracle`] scores them through a
//!   registry of [`oracle::BenchmarkFunction`]s, and [`ranking`] orders
//!   scored candidates with a partition-exchange sort.
//! - [`search`] runs the three strategies and [`stats`] summarizes results.
//! - [`bench`] orchestrates one function-run or a whole dimension, and
//!   [`config`] / [`report`] read the text inputs and write CSV output.
//!
//! The core performs no file I/O; only [`config`] and [`report`] touch the
//! filesystem.

pub mod bench;
pub mod config;
pub mod error;
pub mod oracle;
pub mod random;
pub mod ranking;
pub mod report;
pub mod search;
pub mod stats;

pub use error::{BenchError, Result};
