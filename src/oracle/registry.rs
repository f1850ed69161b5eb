//! Identifier to function lookup table.

use super::functions::STANDARD_FUNCTIONS;
use super::types::{BenchmarkFunction, FnFunction};
use crate::error::{BenchError, Result};
use std::collections::BTreeMap;

/// Registry mapping function identifiers to scoring functions.
///
/// Replaces a hard-coded dispatch: adding a function means registering one
/// more entry.
///
/// # Examples
///
/// ```
/// use u_benchsearch::oracle::FunctionRegistry;
///
/// let registry = FunctionRegistry::standard();
/// assert_eq!(registry.len(), 18);
/// assert_eq!(registry.evaluate(&[0.0, 0.0], 2).unwrap(), 0.0);
/// assert!(registry.evaluate(&[0.0], 19).is_err());
/// ```
pub struct FunctionRegistry {
    entries: BTreeMap<u32, Box<dyn BenchmarkFunction>>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding the 18 standard benchmark functions under IDs 1..=18.
    pub fn standard() -> Self {
        STANDARD_FUNCTIONS
            .iter()
            .fold(Self::new(), |registry, &(id, name, f)| {
                registry.with_function(id, FnFunction::new(name, f))
            })
    }

    /// Registers `function` under `id`, replacing any previous entry.
    pub fn register<F: BenchmarkFunction + 'static>(&mut self, id: u32, function: F) {
        self.entries.insert(id, Box::new(function));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_function<F: BenchmarkFunction + 'static>(mut self, id: u32, function: F) -> Self {
        self.register(id, function);
        self
    }

    /// Resolves `id` to its function.
    ///
    /// # Errors
    ///
    /// [`BenchError::UnknownFunctionId`] naming the ID and the valid ones.
    pub fn get(&self, id: i64) -> Result<&dyn BenchmarkFunction> {
        u32::try_from(id)
            .ok()
            .and_then(|key| self.entries.get(&key))
            .map(|f| &**f)
            .ok_or_else(|| BenchError::UnknownFunctionId {
                id,
                valid: self.describe_ids(),
            })
    }

    /// Evaluates `x` with the function registered under `id`.
    pub fn evaluate(&self, x: &[f64], id: i64) -> Result<f64> {
        Ok(self.get(id)?.evaluate(x))
    }

    pub fn contains(&self, id: i64) -> bool {
        u32::try_from(id).is_ok_and(|key| self.entries.contains_key(&key))
    }

    /// Registered identifiers in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    /// `(id, name)` pairs in ascending ID order.
    pub fn listing(&self) -> Vec<(u32, &str)> {
        self.entries.iter().map(|(&id, f)| (id, f.name())).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact description of the registered IDs, e.g. `1-18` or `1-3, 7`.
    pub fn describe_ids(&self) -> String {
        let ids = self.ids();
        if ids.is_empty() {
            return "none".into();
        }

        let mut runs: Vec<(u32, u32)> = Vec::new();
        for id in ids {
            match runs.last_mut() {
                Some((_, end)) if *end + 1 == id => *end = id,
                _ => runs.push((id, id)),
            }
        }

        runs.iter()
            .map(|&(start, end)| {
                if start == end {
                    start.to_string()
                } else {
                    format!("{start}-{end}")
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.listing()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_resolves_all_ids() {
        let registry = FunctionRegistry::standard();
        for id in 1..=18 {
            assert!(registry.get(id).is_ok(), "id {id} missing");
        }
        assert_eq!(registry.get(1).unwrap().name(), "Schwefel");
        assert_eq!(registry.get(18).unwrap().name(), "Alpine");
    }

    #[test]
    fn test_out_of_range_ids_rejected() {
        let registry = FunctionRegistry::standard();
        for id in [0, 19, -4] {
            match registry.get(id).map(|f| f.name().to_string()) {
                Err(BenchError::UnknownFunctionId { id: got, valid }) => {
                    assert_eq!(got, id);
                    assert_eq!(valid, "1-18");
                }
                other => panic!("expected UnknownFunctionId, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_register_additional_function() {
        let registry = FunctionRegistry::standard()
            .with_function(19, FnFunction::new("Constant", |_: &[f64]| 7.0));

        assert_eq!(registry.len(), 19);
        assert_eq!(registry.evaluate(&[1.0, 2.0], 19).unwrap(), 7.0);
        assert_eq!(registry.describe_ids(), "1-19");
    }

    #[test]
    fn test_describe_ids_with_gaps() {
        let registry = FunctionRegistry::new()
            .with_function(1, FnFunction::new("a", |_: &[f64]| 0.0))
            .with_function(2, FnFunction::new("b", |_: &[f64]| 0.0))
            .with_function(5, FnFunction::new("c", |_: &[f64]| 0.0));
        assert_eq!(registry.describe_ids(), "1-2, 5");
        assert_eq!(FunctionRegistry::new().describe_ids(), "none");
    }

    #[test]
    fn test_file_stems_of_standard_functions() {
        let registry = FunctionRegistry::standard();
        assert_eq!(registry.get(2).unwrap().file_stem(), "DeJong1");
        assert_eq!(registry.get(6).unwrap().file_stem(), "SineEnvelopeSineWave");
    }

    #[test]
    fn test_contains() {
        let registry = FunctionRegistry::standard();
        assert!(registry.contains(4));
        assert!(!registry.contains(0));
        assert!(!registry.contains(-1));
    }
}
