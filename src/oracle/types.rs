//! Core trait for scoring functions.

/// A benchmark (objective) function.
///
/// Implementations are pure: the same vector always yields the same
/// fitness, and no state is shared between calls.
///
/// # Minimization
///
/// Lower fitness is better throughout the crate.
///
/// # Examples
///
/// ```
/// use u_benchsearch::oracle::{BenchmarkFunction, FnFunction};
///
/// let sphere = FnFunction::new("Sphere", |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>());
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// assert_eq!(sphere.name(), "Sphere");
/// ```
pub trait BenchmarkFunction: Send + Sync {
    /// Display name of the function.
    fn name(&self) -> &str;

    /// Computes the fitness of `x`. Lower is better.
    fn evaluate(&self, x: &[f64]) -> f64;

    /// Name with everything but ASCII letters and digits removed, used for
    /// output file names.
    fn file_stem(&self) -> String {
        self.name()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }
}

/// A [`BenchmarkFunction`] backed by a closure or function pointer.
pub struct FnFunction<F> {
    name: String,
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> BenchmarkFunction for FnFunction<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        (self.f)(x)
    }
}

impl<F> std::fmt::Debug for FnFunction<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFunction").field("name", &self.name).finish()
    }
}
