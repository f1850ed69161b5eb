//! Search execution loops.

use super::config::{SampleSpace, SearchConfig};
use super::neighborhood::create_neighborhood;
use super::types::{BlindSearchResult, IterativeSearchResult, LocalSearchResult};
use crate::error::Result;
use crate::oracle::BenchmarkFunction;
use crate::random::{Candidate, RandomSampler};
use crate::ranking::ScoredBatch;

/// Executes blind, local and iterative local search.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs blind search for `iterations` rounds.
    ///
    /// Every round scores and ranks a fresh sample drawn from `space`; the
    /// round's best replaces the incumbent only when strictly better.
    /// With `iterations == 0` the seed is returned unchanged.
    ///
    /// # Errors
    ///
    /// Propagates shape and bound errors from `space`.
    pub fn blind_search<F: BenchmarkFunction + ?Sized>(
        function: &F,
        seed_vector: &[f64],
        seed_fitness: f64,
        space: &SampleSpace,
        iterations: usize,
        sampler: &mut RandomSampler,
    ) -> Result<BlindSearchResult> {
        space.validate()?;

        let mut best: Candidate = seed_vector.to_vec();
        let mut best_fitness = seed_fitness;
        let mut improvements = 0usize;

        for _ in 0..iterations {
            let matrix = sampler.generate(space.rows, space.columns, space.min, space.max)?;
            let batch = ScoredBatch::score(matrix, function).ranked();

            if let Some(round_best) = batch.best() {
                if round_best.fitness < best_fitness {
                    best_fitness = round_best.fitness;
                    best = round_best.vector.clone();
                    improvements += 1;
                }
            }
        }

        tracing::debug!(
            function = function.name(),
            iterations,
            improvements,
            best_fitness,
            "blind search finished"
        );

        Ok(BlindSearchResult {
            best,
            best_fitness,
            rounds: iterations,
            improvements,
        })
    }

    /// Hill-climbs from `seed_vector` until a neighbor fails to improve.
    ///
    /// Stops early, with `converged == false`, once `max_local_steps`
    /// moves have been accepted.
    pub fn local_search<F: BenchmarkFunction + ?Sized>(
        function: &F,
        seed_vector: &[f64],
        config: &SearchConfig,
    ) -> Result<LocalSearchResult> {
        config.validate()?;

        let dims = seed_vector.len();
        let mut best: Candidate = seed_vector.to_vec();
        let seed_fitness = function.evaluate(&best);
        let mut best_fitness = seed_fitness;
        let mut evaluations = 1usize;
        let mut steps = 0usize;
        let mut converged = true;

        loop {
            if config.step_limit_reached(steps) {
                converged = false;
                tracing::warn!(
                    function = function.name(),
                    steps,
                    best_fitness,
                    "local search stopped at step limit"
                );
                break;
            }

            let neighbor = create_neighborhood(function, &best, best_fitness, config.alpha);
            let neighbor_fitness = function.evaluate(&neighbor);
            evaluations += dims + 1;

            if neighbor_fitness < best_fitness {
                best = neighbor;
                best_fitness = neighbor_fitness;
                steps += 1;
            } else {
                break;
            }
        }

        tracing::debug!(
            function = function.name(),
            steps,
            evaluations,
            seed_fitness,
            best_fitness,
            converged,
            "local search finished"
        );

        Ok(LocalSearchResult {
            best,
            best_fitness,
            seed_fitness,
            steps,
            evaluations,
            converged,
        })
    }

    /// Runs `config.iterations` outer iterations of local refinement.
    ///
    /// Each outer iteration probes the neighborhood of the global incumbent
    /// and keeps the best neighbor found so far in an iteration-best record
    /// that carries over between iterations. When that record beats the
    /// global incumbent it becomes the new incumbent. The global best
    /// fitness is appended to `history` after every outer iteration.
    pub fn iterative_local_search<F: BenchmarkFunction + ?Sized>(
        function: &F,
        seed_vector: &[f64],
        config: &SearchConfig,
    ) -> Result<IterativeSearchResult> {
        config.validate()?;

        let dims = seed_vector.len();
        let mut global: Candidate = seed_vector.to_vec();
        let mut global_fitness = function.evaluate(&global);
        let mut iter_best = global.clone();
        let mut iter_best_fitness = global_fitness;
        let mut evaluations = 1usize;
        let mut history = Vec::with_capacity(config.iterations);
        let mut capped_iterations = 0usize;

        for _ in 0..config.iterations {
            let mut steps = 0usize;
            loop {
                if config.step_limit_reached(steps) {
                    capped_iterations += 1;
                    break;
                }

                let neighbor =
                    create_neighborhood(function, &global, global_fitness, config.alpha);
                let neighbor_fitness = function.evaluate(&neighbor);
                evaluations += dims + 1;

                if neighbor_fitness < iter_best_fitness {
                    iter_best = neighbor;
                    iter_best_fitness = neighbor_fitness;
                    steps += 1;
                } else {
                    break;
                }
            }

            if iter_best_fitness < global_fitness {
                global.clone_from(&iter_best);
                global_fitness = iter_best_fitness;
            }
            history.push(global_fitness);
        }

        if capped_iterations > 0 {
            tracing::warn!(
                function = function.name(),
                capped_iterations,
                best_fitness = global_fitness,
                "iterative local search hit the step limit"
            );
        }

        tracing::debug!(
            function = function.name(),
            iterations = config.iterations,
            evaluations,
            best_fitness = global_fitness,
            "iterative local search finished"
        );

        Ok(IterativeSearchResult {
            best: global,
            best_fitness: global_fitness,
            history,
            evaluations,
            capped_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::functions::{de_jong, rastrigin, rosenbrock, ScoreFn};
    use crate::oracle::FnFunction;
    use proptest::prelude::*;

    fn sphere() -> FnFunction<ScoreFn> {
        FnFunction::new("Sphere", de_jong as ScoreFn)
    }

    #[test]
    fn test_local_search_converges_at_optimum() {
        let config = SearchConfig::default().with_alpha(0.5);
        let result = SearchRunner::local_search(&sphere(), &[0.0, 0.0], &config).unwrap();

        assert_eq!(result.seed_fitness, 0.0);
        assert_eq!(result.best_fitness, 0.0);
        assert_eq!(result.best, vec![0.0, 0.0]);
        assert_eq!(result.steps, 0);
        // seed + one neighborhood (2 probes) + the neighbor itself
        assert_eq!(result.evaluations, 4);
        assert!(result.converged);
    }

    #[test]
    fn test_local_search_improves_sphere() {
        let config = SearchConfig::default().with_alpha(0.1);
        let seed = [2.0, -1.5, 0.75];
        let result = SearchRunner::local_search(&sphere(), &seed, &config).unwrap();

        assert!(result.best_fitness < result.seed_fitness);
        assert!(result.steps > 0);
        assert!(result.converged);
        assert_eq!(result.best.len(), seed.len());
    }

    #[test]
    fn test_local_search_step_limit() {
        let config = SearchConfig::default()
            .with_alpha(0.01)
            .with_max_local_steps(2);
        let result = SearchRunner::local_search(&sphere(), &[3.0, 3.0], &config).unwrap();

        assert_eq!(result.steps, 2);
        assert!(!result.converged);
        assert!(result.best_fitness < result.seed_fitness);
    }

    #[test]
    fn test_local_search_rejects_nan_alpha() {
        let config = SearchConfig::default().with_alpha(f64::NAN);
        assert!(SearchRunner::local_search(&sphere(), &[1.0], &config).is_err());
    }

    #[test]
    fn test_iterative_history_length_and_order() {
        let f = FnFunction::new("Rosenbrock", rosenbrock as ScoreFn);
        let config = SearchConfig::default().with_iterations(25).with_alpha(0.001);
        let seed = [0.3, -0.4, 1.2, 0.8];
        let result = SearchRunner::iterative_local_search(&f, &seed, &config).unwrap();

        assert_eq!(result.history.len(), 25);
        assert!(
            result.history.windows(2).all(|w| w[1] <= w[0]),
            "history must be non-increasing: {:?}",
            result.history
        );
        assert_eq!(result.history.last().copied(), Some(result.best_fitness));
        assert!(result.best_fitness <= f.evaluate(&seed));
    }

    #[test]
    fn test_iterative_step_limit_counted() {
        let capped = SearchConfig::default()
            .with_iterations(3)
            .with_alpha(0.01)
            .with_max_local_steps(1);
        let result =
            SearchRunner::iterative_local_search(&sphere(), &[3.0, 3.0], &capped).unwrap();
        assert_eq!(result.capped_iterations, 3);
        assert_eq!(result.history.len(), 3);

        let open = capped.with_max_local_steps(0);
        let result =
            SearchRunner::iterative_local_search(&sphere(), &[3.0, 3.0], &open).unwrap();
        assert_eq!(result.capped_iterations, 0);
    }

    #[test]
    fn test_iterative_zero_iterations() {
        let config = SearchConfig::default().with_iterations(0);
        let result = SearchRunner::iterative_local_search(&sphere(), &[1.0], &config).unwrap();
        assert!(result.history.is_empty());
        assert_eq!(result.best_fitness, 1.0);
    }

    #[test]
    fn test_blind_search_zero_iterations_returns_seed() {
        let mut sampler = RandomSampler::seeded(7);
        let space = SampleSpace::new(10, 2, -5.0, 5.0);
        let result =
            SearchRunner::blind_search(&sphere(), &[1.0, 1.0], 2.0, &space, 0, &mut sampler)
                .unwrap();

        assert_eq!(result.best_fitness, 2.0);
        assert_eq!(result.best, vec![1.0, 1.0]);
        assert_eq!(result.rounds, 0);
        assert_eq!(result.improvements, 0);
    }

    #[test]
    fn test_blind_search_keeps_better_seed() {
        let mut sampler = RandomSampler::seeded(11);
        let space = SampleSpace::new(5, 3, 10.0, 20.0);
        // every sample has fitness >= 300, the seed is already optimal
        let result =
            SearchRunner::blind_search(&sphere(), &[0.0; 3], 0.0, &space, 20, &mut sampler)
                .unwrap();
        assert_eq!(result.best_fitness, 0.0);
        assert_eq!(result.improvements, 0);
    }

    #[test]
    fn test_blind_search_finds_sample_and_vector_matches() {
        let f = FnFunction::new("Rastrigin", rastrigin as ScoreFn);
        let mut sampler = RandomSampler::seeded(42);
        let space = SampleSpace::new(30, 4, -5.12, 5.12);
        let result =
            SearchRunner::blind_search(&f, &[5.0; 4], f.evaluate(&[5.0; 4]), &space, 30, &mut sampler)
                .unwrap();

        assert!(result.improvements > 0);
        assert_eq!(result.best_fitness, f.evaluate(&result.best));
        assert!(result.best.iter().all(|&v| (-5.12..5.12).contains(&v)));
    }

    #[test]
    fn test_blind_search_invalid_space() {
        let mut sampler = RandomSampler::seeded(1);
        let space = SampleSpace::new(0, 3, -1.0, 1.0);
        assert!(
            SearchRunner::blind_search(&sphere(), &[0.0; 3], 0.0, &space, 1, &mut sampler)
                .is_err()
        );
    }

    proptest! {
        #[test]
        fn prop_local_search_never_worse(
            seed in prop::collection::vec(-5.0f64..5.0, 1..6),
            alpha in 0.001f64..0.5,
        ) {
            let f = FnFunction::new("Rastrigin", rastrigin as ScoreFn);
            let config = SearchConfig::default().with_alpha(alpha).with_max_local_steps(500);
            let result = SearchRunner::local_search(&f, &seed, &config).unwrap();
            prop_assert!(result.best_fitness <= result.seed_fitness);
        }

        #[test]
        fn prop_iterative_history_non_increasing(
            seed in prop::collection::vec(-5.0f64..5.0, 1..5),
            iterations in 1usize..20,
        ) {
            let f = FnFunction::new("Rastrigin", rastrigin as ScoreFn);
            let config = SearchConfig::default()
                .with_iterations(iterations)
                .with_alpha(0.01)
                .with_max_local_steps(200);
            let result = SearchRunner::iterative_local_search(&f, &seed, &config).unwrap();
            prop_assert_eq!(result.history.len(), iterations);
            prop_assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
        }
    }
}
