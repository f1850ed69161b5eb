//! Function-run configuration.

use crate::error::{BenchError, Result};
use crate::random::{validate_bounds, validate_shape};

/// Parameters of one function-run.
///
/// # Examples
///
/// ```
/// use u_benchsearch::bench::FunctionRunConfig;
///
/// let config = FunctionRunConfig::new(4, -5.12, 5.12)
///     .with_dimensions(10)
///     .with_samples(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionRunConfig {
    /// Identifier resolved against the function registry.
    pub function_id: i64,

    /// Inclusive lower sampling bound.
    pub min: f64,

    /// Sampling upper bound.
    pub max: f64,

    /// Coordinates per candidate (D).
    pub dimensions: usize,

    /// Candidates per sample (N).
    pub samples: usize,
}

impl FunctionRunConfig {
    /// Default sample count.
    pub const DEFAULT_SAMPLES: usize = 30;

    /// Default dimensionality.
    pub const DEFAULT_DIMENSIONS: usize = 30;

    pub fn new(function_id: i64, min: f64, max: f64) -> Self {
        Self {
            function_id,
            min,
            max,
            dimensions: Self::DEFAULT_DIMENSIONS,
            samples: Self::DEFAULT_SAMPLES,
        }
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidDimensionConfig`] for `D = 0` or `N = 0`,
    /// [`BenchError::InvalidBounds`] for non-finite or inverted bounds.
    pub fn validate(&self) -> Result<()> {
        validate_shape(self.samples, self.dimensions)?;
        validate_bounds(self.min, self.max)
    }
}

impl Default for FunctionRunConfig {
    fn default() -> Self {
        Self::new(1, -512.0, 512.0)
    }
}

impl TryFrom<(i64, f64, f64)> for FunctionRunConfig {
    type Error = BenchError;

    fn try_from((function_id, min, max): (i64, f64, f64)) -> Result<Self> {
        let config = Self::new(function_id, min, max);
        config.validate()?;
        Ok(config)
    }
}
