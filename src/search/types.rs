//! Search result records.

use crate::random::Candidate;

/// Result of a blind (pure random sampling) search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlindSearchResult {
    /// Best candidate seen, the seed if no round beat it.
    pub best: Candidate,
    pub best_fitness: f64,
    /// Sampling rounds executed.
    pub rounds: usize,
    /// Rounds whose best candidate replaced the incumbent.
    pub improvements: usize,
}

/// Result of a local search (hill climbing) run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult {
    pub best: Candidate,
    pub best_fitness: f64,
    /// Fitness of the seed candidate.
    pub seed_fitness: f64,
    /// Accepted (improving) moves.
    pub steps: usize,
    /// Total fitness evaluations, including neighborhood probes.
    pub evaluations: usize,
    /// `false` when the step cap stopped the search before a neighbor
    /// failed to improve.
    pub converged: bool,
}

/// Result of an iterative local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterativeSearchResult {
    pub best: Candidate,
    pub best_fitness: f64,
    /// Global best fitness after each outer iteration, in iteration order.
    ///
    /// Non-increasing, one entry per outer iteration.
    pub history: Vec<f64>,
    pub evaluations: usize,
    /// Outer iterations whose inner loop stopped at the step limit.
    pub capped_iterations: usize,
}
