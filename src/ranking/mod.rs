//! Ranking of scored candidates.
//!
//! A partition-exchange sort (quicksort with a midpoint pivot) orders
//! records by ascending fitness. The exchange step always moves a fitness
//! value together with everything attached to it, so a candidate can never
//! drift away from its score.
//!
//! # References
//!
//! - Hoare, C. A. R. (1962), "Quicksort", *The Computer Journal* 5(1)
//! - Wirth, N. (1976), *Algorithms + Data Structures = Programs*, §2.3.3

mod sort;
mod types;

pub use sort::{
    is_ranked, partition_sort, sort_by_fitness, sort_values, sort_with_payload, Exchange, Paired,
};
pub use types::{Scored, ScoredBatch, ScoredCandidate};
