//! Partition-exchange sort over fitness keys.

use super::types::Scored;
use crate::error::{BenchError, Result};

/// A sequence of records that can be reordered by fitness.
///
/// `exchange` must swap *whole* records: the fitness and every value
/// attached to it.
pub trait Exchange {
    /// Number of records.
    fn size(&self) -> usize;

    /// Fitness (sort key) of the record at `index`.
    fn fitness_at(&self, index: usize) -> f64;

    /// Swaps the records at `a` and `b`.
    fn exchange(&mut self, a: usize, b: usize);
}

impl<T: Scored> Exchange for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn fitness_at(&self, index: usize) -> f64 {
        self[index].fitness()
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// A fitness slice with a parallel payload slice, exchanged in lockstep.
#[derive(Debug)]
pub struct Paired<'a, P> {
    fitness: &'a mut [f64],
    payload: &'a mut [P],
}

impl<'a, P> Paired<'a, P> {
    /// Pairs `fitness[i]` with `payload[i]`.
    ///
    /// # Errors
    ///
    /// [`BenchError::LengthMismatch`] when the slices differ in length.
    pub fn new(fitness: &'a mut [f64], payload: &'a mut [P]) -> Result<Self> {
        if fitness.len() != payload.len() {
            return Err(BenchError::LengthMismatch {
                fitness: fitness.len(),
                payload: payload.len(),
            });
        }
        Ok(Self { fitness, payload })
    }
}

impl<P> Exchange for Paired<'_, P> {
    fn size(&self) -> usize {
        self.fitness.len()
    }

    fn fitness_at(&self, index: usize) -> f64 {
        self.fitness[index]
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.fitness.swap(a, b);
        self.payload.swap(a, b);
    }
}

/// Sorts `records` by ascending fitness, in place.
///
/// Pivot is the fitness at the midpoint of the active range. Elements equal
/// to the pivot are exchanged like any other, so the order among equal
/// fitness values is not preserved. NaN ranks after every number, so a
/// failed evaluation can never become the best record.
///
/// # Complexity
///
/// O(n log n) on average, O(n^2) on adversarial input.
pub fn partition_sort<E: Exchange + ?Sized>(records: &mut E) {
    let n = records.size();
    if n < 2 {
        return;
    }
    sort_range(records, 0, n as isize - 1);
}

fn sort_range<E: Exchange + ?Sized>(records: &mut E, left: isize, right: isize) {
    if left >= right {
        return;
    }

    let mut i = left;
    let mut j = right;
    let pivot = records.fitness_at((left + (right - left) / 2) as usize);

    while i < right || j > left {
        while precedes(records.fitness_at(i as usize), pivot) {
            i += 1;
        }
        while precedes(pivot, records.fitness_at(j as usize)) {
            j -= 1;
        }

        if i <= j {
            records.exchange(i as usize, j as usize);
            i += 1;
            j -= 1;
        } else {
            if i < right {
                sort_range(records, i, right);
            }
            if j > left {
                sort_range(records, left, j);
            }
            return;
        }
    }
}

/// Strict ascending order with NaN above every number and NaNs all equal.
fn precedes(a: f64, b: f64) -> bool {
    a < b || (b.is_nan() && !a.is_nan())
}

/// Sorts scored records by ascending fitness.
pub fn sort_by_fitness<T: Scored>(items: &mut [T]) {
    partition_sort(items);
}

/// Sorts bare fitness values ascending.
pub fn sort_values(values: &mut [f64]) {
    partition_sort(values);
}

/// Sorts `fitness` ascending and applies the same permutation to `payload`.
///
/// # Examples
///
/// ```
/// use u_benchsearch::ranking::sort_with_payload;
///
/// let mut fitness = vec![5.0, 1.0, 4.0, 1.0, 3.0];
/// let mut payload = vec!['a', 'b', 'c', 'd', 'e'];
/// sort_with_payload(&mut fitness, &mut payload).unwrap();
///
/// assert_eq!(fitness, vec![1.0, 1.0, 3.0, 4.0, 5.0]);
/// assert_eq!(&payload[2..], &['e', 'c', 'a']);
/// ```
pub fn sort_with_payload<P>(fitness: &mut [f64], payload: &mut [P]) -> Result<()> {
    let mut paired = Paired::new(fitness, payload)?;
    partition_sort(&mut paired);
    Ok(())
}

/// Whether fitness is non-decreasing across `items`, NaN last.
pub fn is_ranked<T: Scored>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|w| !precedes(w[1].fitness(), w[0].fitness()))
}
