//! Mean, population standard deviation, range and median.

use crate::error::{BenchError, Result};
use std::time::Duration;

/// Order statistics and moments of one fitness sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessSummary {
    /// Arithmetic mean.
    pub average: f64,
    /// Population standard deviation (divides by N).
    pub std_dev: f64,
    /// First element of the sorted sample.
    pub min: f64,
    /// Last element of the sorted sample.
    pub max: f64,
    /// Element at index `N / 2` of the sorted sample.
    ///
    /// For even N this is the upper of the two middle elements, not their
    /// average.
    pub median: f64,
}

/// Summarizes a sample sorted in ascending order.
///
/// The input is not re-sorted: `min`, `max` and `median` are read from the
/// first, last and middle positions.
///
/// # Errors
///
/// [`BenchError::EmptySample`] for an empty slice.
///
/// # Examples
///
/// ```
/// use u_benchsearch::stats::summarize;
///
/// let s = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(s.average, 2.5);
/// assert_eq!(s.median, 3.0);
/// assert_eq!((s.min, s.max), (1.0, 4.0));
/// ```
pub fn summarize(sorted: &[f64]) -> Result<FitnessSummary> {
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Err(BenchError::EmptySample);
    };

    let n = sorted.len() as f64;
    let average = sorted.iter().sum::<f64>() / n;
    let variance = sorted
        .iter()
        .map(|&x| (x - average) * (x - average))
        .sum::<f64>()
        / n;

    Ok(FitnessSummary {
        average,
        std_dev: variance.sqrt(),
        min,
        max,
        median: sorted[sorted.len() / 2],
    })
}

/// A [`FitnessSummary`] plus the wall-clock time of the phase that produced
/// the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStats {
    pub summary: FitnessSummary,
    pub elapsed: Duration,
}

impl AggregateStats {
    pub fn new(summary: FitnessSummary, elapsed: Duration) -> Self {
        Self { summary, elapsed }
    }

    /// Summarizes an ascending sample timed at `elapsed`.
    pub fn from_sorted(sorted: &[f64], elapsed: Duration) -> Result<Self> {
        Ok(Self::new(summarize(sorted)?, elapsed))
    }

    /// Statistics of a single scalar outcome (std dev 0, range collapsed).
    pub fn from_scalar(value: f64, elapsed: Duration) -> Self {
        Self::new(
            FitnessSummary {
                average: value,
                std_dev: 0.0,
                min: value,
                max: value,
                median: value,
            },
            elapsed,
        )
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_sample_rejected() {
        assert!(matches!(summarize(&[]), Err(BenchError::EmptySample)));
    }

    #[test]
    fn test_population_std_dev() {
        // mean 5, squared deviations sum to 32, N = 8
        let s = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((s.average - 5.0).abs() < 1e-12);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_upper_middle_for_even_n() {
        let s = summarize(&[1.0, 2.0, 10.0, 20.0]).unwrap();
        assert_eq!(s.median, 10.0);
    }

    #[test]
    fn test_median_odd_n() {
        let s = summarize(&[-3.0, 0.0, 8.0]).unwrap();
        assert_eq!(s.median, 0.0);
    }

    #[test]
    fn test_min_max_read_positionally() {
        // Unsorted input is taken as-is.
        let s = summarize(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!((s.min, s.max), (5.0, 3.0));
    }

    #[test]
    fn test_single_value() {
        let s = summarize(&[-12.5]).unwrap();
        assert_eq!(s.average, -12.5);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.median, -12.5);
    }

    #[test]
    fn test_from_scalar_matches_summarize() {
        let elapsed = Duration::from_millis(3);
        let scalar = AggregateStats::from_scalar(4.25, elapsed);
        let summarized = AggregateStats::from_sorted(&[4.25], elapsed).unwrap();
        assert_eq!(scalar, summarized);
        assert!((scalar.elapsed_ms() - 3.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_constant_sequence(v in -1e6f64..1e6, n in 1usize..100) {
            let values = vec![v; n];
            let s = summarize(&values).unwrap();

            prop_assert!((s.average - v).abs() <= 1e-9 * v.abs().max(1.0));
            prop_assert!(s.std_dev <= 1e-9 * v.abs().max(1.0));
            prop_assert_eq!(s.min, v);
            prop_assert_eq!(s.max, v);
            prop_assert_eq!(s.median, v);
        }
    }
}
