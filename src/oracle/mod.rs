//! Fitness oracle.
//!
//! Maps a candidate vector and a function identifier to a scalar fitness
//! (lower is better). Identifiers are resolved through a
//! [`FunctionRegistry`]; the standard registry holds the 18 classic
//! benchmark functions in [`functions`].
//!
//! # References
//!
//! - Molga, M. & Smutnicki, C. (2005), "Test functions for optimization needs"
//! - Jamil, M. & Yang, X.-S. (2013), "A literature survey of benchmark
//!   functions for global optimization problems"

pub mod functions;
mod registry;
mod types;

pub use registry::FunctionRegistry;
pub use types::{BenchmarkFunction, FnFunction};
