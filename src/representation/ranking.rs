//! Fitness-aware ordering of individuals.
//!
//! Ordering depends on one run-wide direction flag. Whatever the
//! direction, "less" means "worse": an ascending sort puts the worst
//! individual first and the best last.

use super::individual::Individual;
use crate::fitness::FitnessValue;
use std::cmp::Ordering;

/// Whether fitness `a` ranks below fitness `b`.
///
/// When maximising, a numerically smaller fitness is worse. When
/// minimising the comparison is inverted.
pub fn less_than_fitness<F: PartialOrd>(a: &F, b: &F, maximise: bool) -> bool {
    if maximise {
        a < b
    } else {
        b < a
    }
}

fn is_incomparable<F: PartialOrd>(fitness: &F) -> bool {
    fitness.partial_cmp(fitness).is_none()
}

/// Comparator for individuals under a fixed direction.
///
/// # Examples
///
/// ```
/// use u_gevo::representation::{Individual, Ranking};
///
/// let mut population: Vec<_> = [3.0, 1.0, 2.0]
///     .into_iter()
///     .map(|f| {
///         let mut ind: Individual<String, (), f64> = Individual::unmapped(vec![], None, false);
///         ind.fitness = f;
///         ind
///     })
///     .collect();
///
/// let ranking = Ranking::new(false);
/// ranking.sort_population(&mut population);
///
/// // Minimising: worst (3.0) first, best (1.0) last.
/// let order: Vec<f64> = population.iter().map(|i| i.fitness).collect();
/// assert_eq!(order, vec![3.0, 2.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking {
    maximise: bool,
}

impl Ranking {
    pub fn new(maximise: bool) -> Self {
        Self { maximise }
    }

    pub fn maximise(&self) -> bool {
        self.maximise
    }

    pub fn less_than<P, T, F: FitnessValue>(
        &self,
        a: &Individual<P, T, F>,
        b: &Individual<P, T, F>,
    ) -> bool {
        less_than_fitness(&a.fitness, &b.fitness, self.maximise)
    }

    /// Total ordering for `sort_by`.
    ///
    /// A fitness that is not comparable with itself (NaN) ranks below every
    /// other fitness in either direction, and equal to another such fitness.
    /// It sorts first and is never picked by [`Ranking::best`] while a
    /// comparable fitness exists.
    pub fn compare<P, T, F: FitnessValue>(
        &self,
        a: &Individual<P, T, F>,
        b: &Individual<P, T, F>,
    ) -> Ordering {
        match (is_incomparable(&a.fitness), is_incomparable(&b.fitness)) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        if self.less_than(a, b) {
            Ordering::Less
        } else if self.less_than(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Sorts worst first, best last. Stable.
    pub fn sort_population<P, T, F: FitnessValue>(&self, population: &mut [Individual<P, T, F>]) {
        population.sort_by(|a, b| self.compare(a, b));
    }

    /// The best individual, or `None` for an empty population.
    pub fn best<'a, P, T, F: FitnessValue>(
        &self,
        population: &'a [Individual<P, T, F>],
    ) -> Option<&'a Individual<P, T, F>> {
        population.iter().max_by(|a, b| self.compare(a, b))
    }
}
