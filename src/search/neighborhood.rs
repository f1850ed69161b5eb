//! Finite-difference neighborhood rule.

use crate::oracle::BenchmarkFunction;
use crate::random::Candidate;

/// Derives the neighbor of `origin`.
///
/// Each coordinate is handled independently: only that coordinate is
/// shifted by `+alpha`, the shifted copy is scored, and the neighbor
/// coordinate becomes `origin[i] - alpha * (shifted_fitness - origin_fitness)`.
/// `alpha` is both the probe size and the step size.
///
/// Costs one fitness evaluation per coordinate. Deterministic.
///
/// # Examples
///
/// ```
/// use u_benchsearch::oracle::FnFunction;
/// use u_benchsearch::search::create_neighborhood;
///
/// let sphere = FnFunction::new("Sphere", |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>());
/// let neighbor = create_neighborhood(&sphere, &[1.0], 1.0, 0.5);
/// // shifted fitness 2.25, so 1.0 - 0.5 * (2.25 - 1.0)
/// assert_eq!(neighbor, vec![0.375]);
/// ```
pub fn create_neighborhood<F: BenchmarkFunction + ?Sized>(
    function: &F,
    origin: &[f64],
    origin_fitness: f64,
    alpha: f64,
) -> Candidate {
    let mut probe = origin.to_vec();
    (0..origin.len())
        .map(|i| {
            probe[i] = origin[i] + alpha;
            let shifted_fitness = function.evaluate(&probe);
            probe[i] = origin[i];
            origin[i] - alpha * (shifted_fitness - origin_fitness)
        })
        .collect()
}
