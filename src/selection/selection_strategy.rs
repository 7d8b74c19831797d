use std::fmt::Debug;

use crate::error::Result;
use crate::population::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent-selection strategies.
///
/// Selection strategies choose individuals from a population based on
/// their fitness. Different strategies trade exploration against
/// exploitation; all of them assume the internal maximize convention and
/// select with replacement, so the same individual may be picked more
/// than once.
///
/// # Examples
///
/// ```
/// use evolab::population::Individual;
/// use evolab::rng::RandomNumberGenerator;
/// use evolab::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     Individual::new(vec![0.0], -1.0),
///     Individual::new(vec![1.0], -4.0),
///     Individual::new(vec![2.0], -9.0),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = TournamentSelection::default();
/// let parents = selection.select(&population, 2, &mut rng).unwrap();
/// assert_eq!(parents.len(), 2);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from the population.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EvoError::EmptyPopulation`] when the
    /// population is empty.
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

/// Walks a cumulative-weight table and returns the index the draw lands
/// on. Weights must be non-negative with a positive total.
pub(crate) fn spin_wheel(weights: &[f64], rng: &mut RandomNumberGenerator) -> usize {
    let total: f64 = weights.iter().sum();
    let mut draw = rng.uniform(0.0, total);
    for (i, w) in weights.iter().enumerate() {
        draw -= w;
        if draw <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}
