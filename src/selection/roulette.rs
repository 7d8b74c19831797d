use crate::error::{EvoError, Result};
use crate::population::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{spin_wheel, SelectionStrategy};

/// A selection strategy that selects individuals through roulette-wheel
/// (fitness-proportionate) selection.
///
/// Each individual's selection probability is proportional to its fitness
/// after shifting the whole population positive: with `f_min` the lowest
/// fitness in the population, the weight of individual `i` is
/// `f_i - f_min + 1`. The `+1` offset keeps every weight strictly
/// positive, so a population of equal fitness degenerates to uniform
/// selection instead of a division by zero.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a roulette-wheel selection strategy.
    pub fn new() -> Self {
        Self
    }

    fn weights(population: &[Individual]) -> Vec<f64> {
        let f_min = population
            .iter()
            .map(|ind| ind.fitness)
            .fold(f64::INFINITY, f64::min);
        population
            .iter()
            .map(|ind| ind.fitness - f_min + 1.0)
            .collect()
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(EvoError::EmptyPopulation);
        }

        let weights = Self::weights(population);
        Ok((0..num_to_select)
            .map(|_| population[spin_wheel(&weights, rng)].clone())
            .collect())
    }
}
