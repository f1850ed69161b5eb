//! Uniform candidate sampling.
//!
//! [`RandomSampler`] owns its generator state, so consecutive calls to
//! [`RandomSampler::generate`] produce different matrices. Runs that execute
//! side by side each get their own sampler (see [`RandomSampler::for_run`]).

use crate::error::{BenchError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A candidate point: one fixed-length vector of reals.
pub type Candidate = Vec<f64>;

/// Creates a seeded standard RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates uniformly distributed candidates within bounds.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a sampler from an explicit seed, or from a random seed when
    /// `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: create_rng(seed),
        }
    }

    /// Creates a sampler from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Sampler for the `index`-th run at `dimensions` derived from
    /// `base_seed`.
    ///
    /// Every `(dimensions, index)` pair gets its own stream, so runs of the
    /// same function at different dimensionalities are not correlated.
    pub fn for_run(base_seed: u64, dimensions: usize, index: usize) -> Self {
        let dimension_key: u64 =
            create_rng(base_seed ^ (dimensions as u64).rotate_left(32)).random();
        Self::seeded(dimension_key.wrapping_add(index as u64))
    }

    /// Resets the generator state.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = create_rng(seed);
    }

    /// Draws one candidate of `columns` coordinates in `[min, max)`.
    pub fn candidate(&mut self, columns: usize, min: f64, max: f64) -> Result<Candidate> {
        validate_shape(1, columns)?;
        validate_bounds(min, max)?;
        Ok(self.draw_row(columns, min, max))
    }

    /// Draws a `rows x columns` matrix, each element independent and
    /// uniform in `[min, max)`.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidDimensionConfig`] for zero rows or columns,
    /// [`BenchError::InvalidBounds`] for non-finite or inverted bounds.
    pub fn generate(
        &mut self,
        rows: usize,
        columns: usize,
        min: f64,
        max: f64,
    ) -> Result<Vec<Candidate>> {
        validate_shape(rows, columns)?;
        validate_bounds(min, max)?;
        Ok((0..rows)
            .map(|_| self.draw_row(columns, min, max))
            .collect())
    }

    fn draw_row(&mut self, columns: usize, min: f64, max: f64) -> Candidate {
        let span = max - min;
        (0..columns)
            .map(|_| {
                let unit: f64 = self.rng.random();
                min + span * unit
            })
            .collect()
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new(None)
    }
}

pub(crate) fn validate_shape(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(BenchError::InvalidDimensionConfig { rows, columns });
    }
    Ok(())
}

pub(crate) fn validate_bounds(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(BenchError::InvalidBounds { min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape_and_bounds() {
        let mut sampler = RandomSampler::seeded(42);
        let m = sampler.generate(5, 3, -1.0, 1.0).unwrap();

        assert_eq!(m.len(), 5);
        for row in &m {
            assert_eq!(row.len(), 3);
            for &v in row {
                assert!((-1.0..=1.0).contains(&v), "value {v} out of bounds");
            }
        }
    }

    #[test]
    fn test_generate_half_open_range() {
        let mut sampler = RandomSampler::seeded(7);
        let m = sampler.generate(50, 20, 2.0, 3.0).unwrap();
        assert!(m.iter().flatten().all(|&v| (2.0..3.0).contains(&v)));
    }

    #[test]
    fn test_degenerate_bounds_yield_min() {
        let mut sampler = RandomSampler::seeded(1);
        let m = sampler.generate(3, 4, 5.0, 5.0).unwrap();
        assert!(m.iter().flatten().all(|&v| v == 5.0));
    }

    #[test]
    fn test_repeated_calls_diverge() {
        let mut sampler = RandomSampler::seeded(42);
        let a = sampler.generate(4, 4, -10.0, 10.0).unwrap();
        let b = sampler.generate(4, 4, -10.0, 10.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_reproduces() {
        let a = RandomSampler::seeded(9).generate(3, 3, 0.0, 1.0).unwrap();
        let b = RandomSampler::seeded(9).generate(3, 3, 0.0, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut sampler = RandomSampler::seeded(11);
        let first = sampler.generate(2, 2, 0.0, 1.0).unwrap();
        sampler.reseed(11);
        let again = sampler.generate(2, 2, 0.0, 1.0).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_zero_rows_or_columns_rejected() {
        let mut sampler = RandomSampler::seeded(0);
        assert!(matches!(
            sampler.generate(0, 3, 0.0, 1.0),
            Err(BenchError::InvalidDimensionConfig { rows: 0, columns: 3 })
        ));
        assert!(matches!(
            sampler.generate(3, 0, 0.0, 1.0),
            Err(BenchError::InvalidDimensionConfig { .. })
        ));
    }

    #[test]
    fn test_inverted_or_infinite_bounds_rejected() {
        let mut sampler = RandomSampler::seeded(0);
        assert!(matches!(
            sampler.generate(1, 1, 1.0, -1.0),
            Err(BenchError::InvalidBounds { .. })
        ));
        assert!(sampler.generate(1, 1, f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_for_run_samplers_are_independent() {
        let a = RandomSampler::for_run(100, 5, 0).generate(2, 5, 0.0, 1.0).unwrap();
        let b = RandomSampler::for_run(100, 5, 1).generate(2, 5, 0.0, 1.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_for_run_streams_differ_across_dimensions() {
        let narrow = RandomSampler::for_run(7, 2, 0).generate(1, 2, -1.0, 1.0).unwrap();
        let wide = RandomSampler::for_run(7, 4, 0).generate(1, 4, -1.0, 1.0).unwrap();
        assert_ne!(narrow[0][..], wide[0][..2], "2-D draws must not prefix the 4-D draws");
    }

    #[test]
    fn test_for_run_reproducible() {
        let a = RandomSampler::for_run(7, 3, 2).generate(2, 3, 0.0, 1.0).unwrap();
        let b = RandomSampler::for_run(7, 3, 2).generate(2, 3, 0.0, 1.0).unwrap();
        assert_eq!(a, b);
    }
}
