//! Blind search, local search and iterative local search.
//!
//! All three minimize a [`BenchmarkFunction`](crate::oracle::BenchmarkFunction)
//! starting from a seed candidate (usually the best row of a ranked sample).
//! Local and iterative local search move through the deterministic
//! finite-difference neighborhood in [`create_neighborhood`], so for fixed
//! inputs they are fully reproducible. Blind search only draws fresh random
//! samples.
//!
//! # References
//!
//! - Brooks, S. H. (1958), "A discussion of random methods for seeking maxima"
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003), "Iterated Local
//!   Search", *Handbook of Metaheuristics*

mod config;
mod neighborhood;
mod runner;
mod types;

pub use config::{SampleSpace, SearchConfig};
pub use neighborhood::create_neighborhood;
pub use runner::SearchRunner;
pub use types::{BlindSearchResult, IterativeSearchResult, LocalSearchResult};
