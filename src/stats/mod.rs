//! Summary statistics over fitness results.
//!
//! The aggregator reads min, max and median positionally, so its input must
//! already be sorted ascending (see [`crate::ranking::sort_values`]).

mod aggregate;

pub use aggregate::{summarize, AggregateStats, FitnessSummary};
