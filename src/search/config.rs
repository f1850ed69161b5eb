//! Search configuration.

use crate::error::{BenchError, Result};
use crate::random::{validate_bounds, validate_shape};

/// Parameters shared by the three search algorithms.
///
/// # Examples
///
/// ```
/// use u_benchsearch::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_iterations(50)
///     .with_alpha(0.05)
///     .with_max_local_steps(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Rounds of blind search and outer iterations of iterative local search.
    pub iterations: usize,

    /// Perturbation size and step size of the neighborhood rule.
    pub alpha: f64,

    /// Maximum accepted moves in one local convergence loop. 0 = no limit.
    ///
    /// The neighborhood rule is not guaranteed to stop improving on every
    /// landscape, so a finite cap keeps each run bounded.
    pub max_local_steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 30,
            alpha: 0.01,
            max_local_steps: 100_000,
        }
    }
}

impl SearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_local_steps(mut self, n: usize) -> Self {
        self.max_local_steps = n;
        self
    }

    /// Whether `steps` accepted moves exhaust the local step budget.
    pub(crate) fn step_limit_reached(&self, steps: usize) -> bool {
        self.max_local_steps > 0 && steps >= self.max_local_steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() {
            return Err(BenchError::InvalidSearchConfig(format!(
                "alpha must be finite, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// Shape and bounds of the random samples drawn by blind search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSpace {
    /// Candidates per sample.
    pub rows: usize,
    /// Coordinates per candidate.
    pub columns: usize,
    pub min: f64,
    pub max: f64,
}

impl SampleSpace {
    pub fn new(rows: usize, columns: usize, min: f64, max: f64) -> Self {
        Self {
            rows,
            columns,
            min,
            max,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_shape(self.rows, self.columns)?;
        validate_bounds(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.iterations, 30);
        assert!((config.alpha - 0.01).abs() < 1e-15);
        assert_eq!(config.max_local_steps, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_alpha_rejected() {
        let config = SearchConfig::default().with_alpha(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidSearchConfig(_))
        ));
    }

    #[test]
    fn test_step_limit() {
        let capped = SearchConfig::default().with_max_local_steps(3);
        assert!(!capped.step_limit_reached(2));
        assert!(capped.step_limit_reached(3));

        let unlimited = SearchConfig::default().with_max_local_steps(0);
        assert!(!unlimited.step_limit_reached(usize::MAX));
    }

    #[test]
    fn test_sample_space_validation() {
        assert!(SampleSpace::new(30, 10, -5.0, 5.0).validate().is_ok());
        assert!(SampleSpace::new(0, 10, -5.0, 5.0).validate().is_err());
        assert!(SampleSpace::new(30, 10, 5.0, -5.0).validate().is_err());
    }
}
