//! Scored candidate records.

use super::sort::{is_ranked, sort_by_fitness};
use crate::oracle::BenchmarkFunction;
use crate::random::Candidate;

/// Anything carrying a fitness value. Lower is better.
pub trait Scored {
    fn fitness(&self) -> f64;
}

impl Scored for f64 {
    fn fitness(&self) -> f64 {
        *self
    }
}

impl<P> Scored for (f64, P) {
    fn fitness(&self) -> f64 {
        self.0
    }
}

/// A candidate bound to the fitness it produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    pub vector: Candidate,
    pub fitness: f64,
}

impl ScoredCandidate {
    /// Scores `vector` with `function`.
    pub fn evaluate<F: BenchmarkFunction + ?Sized>(vector: Candidate, function: &F) -> Self {
        let fitness = function.evaluate(&vector);
        Self { vector, fitness }
    }
}

impl Scored for ScoredCandidate {
    fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// A batch of scored candidates held in one ordered container.
///
/// After [`rank`](Self::rank), fitness is non-decreasing and
/// [`best`](Self::best) is the lowest-fitness candidate.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredBatch {
    records: Vec<ScoredCandidate>,
}

impl ScoredBatch {
    /// Scores every row of `matrix` with `function`.
    pub fn score<F: BenchmarkFunction + ?Sized>(matrix: Vec<Candidate>, function: &F) -> Self {
        Self {
            records: matrix
                .into_iter()
                .map(|row| ScoredCandidate::evaluate(row, function))
                .collect(),
        }
    }

    /// Sorts the batch by ascending fitness.
    pub fn rank(&mut self) {
        sort_by_fitness(&mut self.records);
    }

    /// Consuming form of [`rank`](Self::rank).
    pub fn ranked(mut self) -> Self {
        self.rank();
        self
    }

    pub fn is_ranked(&self) -> bool {
        is_ranked(&self.records)
    }

    /// First record; the best one once the batch is ranked.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.records.first()
    }

    /// Last record; the worst one once the batch is ranked.
    pub fn worst(&self) -> Option<&ScoredCandidate> {
        self.records.last()
    }

    pub fn records(&self) -> &[ScoredCandidate] {
        &self.records
    }

    /// Fitness column, in batch order.
    pub fn fitness(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.fitness).collect()
    }

    /// Vector column, in batch order.
    pub fn vectors(&self) -> impl Iterator<Item = &[f64]> {
        self.records.iter().map(|r| r.vector.as_slice())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of coordinates per candidate (0 for an empty batch).
    pub fn dimensions(&self) -> usize {
        self.records.first().map_or(0, |r| r.vector.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::functions::{de_jong, ScoreFn};
    use crate::oracle::FnFunction;

    fn sphere() -> FnFunction<ScoreFn> {
        FnFunction::new("Sphere", de_jong as ScoreFn)
    }

    #[test]
    fn test_score_and_rank_keeps_pairs() {
        let matrix = vec![
            vec![3.0, 0.0],
            vec![1.0, 0.0],
            vec![2.0, 2.0],
            vec![0.0, 0.5],
        ];
        let batch = ScoredBatch::score(matrix, &sphere()).ranked();

        assert!(batch.is_ranked());
        assert_eq!(batch.fitness(), vec![0.25, 1.0, 8.0, 9.0]);
        for record in batch.records() {
            assert_eq!(record.fitness, sphere().evaluate(&record.vector));
        }
        assert_eq!(batch.best().unwrap().vector, vec![0.0, 0.5]);
        assert_eq!(batch.worst().unwrap().vector, vec![3.0, 0.0]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = ScoredBatch::default().ranked();
        assert!(batch.is_empty());
        assert!(batch.best().is_none());
        assert_eq!(batch.dimensions(), 0);
    }

    #[test]
    fn test_vectors_column() {
        let batch = ScoredBatch::score(vec![vec![1.0], vec![2.0]], &sphere());
        let cols: Vec<&[f64]> = batch.vectors().collect();
        assert_eq!(cols, vec![&[1.0][..], &[2.0][..]]);
        assert_eq!(batch.dimensions(), 1);
    }

    #[test]
    fn test_tuple_records_sort() {
        let mut items = vec![(3.0, "c"), (1.0, "a"), (2.0, "b")];
        sort_by_fitness(&mut items);
        assert_eq!(items, vec![(1.0, "a"), (2.0, "b"), (3.0, "c")]);
    }
}
