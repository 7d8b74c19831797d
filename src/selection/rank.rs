use crate::error::{EvoError, Result};
use crate::population::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{spin_wheel, SelectionStrategy};

/// A selection strategy that selects individuals with probability
/// proportional to their linear rank.
///
/// The population is ranked by fitness (worst rank 1, best rank n) and
/// the selection weight of each individual is its rank. Rank-based
/// selection is insensitive to the absolute scale of the fitness values,
/// which makes it robust when a few outliers would otherwise dominate a
/// fitness-proportionate wheel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RankSelection;

impl RankSelection {
    /// Creates a linear-rank selection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Weight of each individual = its 1-based rank in fitness order.
    fn weights(population: &[Individual]) -> Vec<f64> {
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by(|&a, &b| {
            population[a]
                .fitness
                .partial_cmp(&population[b].fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut weights = vec![0.0; population.len()];
        for (rank, &idx) in order.iter().enumerate() {
            weights[idx] = (rank + 1) as f64;
        }
        weights
    }
}

impl SelectionStrategy for RankSelection {
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
