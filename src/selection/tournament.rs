use crate::error::{EvoError, Result};
use crate::population::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament
/// selection.
///
/// Tournament selection randomly draws a small group of individuals (the
/// tournament size) and keeps the best of the group. The process repeats
/// until the desired number of individuals has been selected.
///
/// Smaller tournaments select more randomly (exploration), larger
/// tournaments focus harder on the best individuals (exploitation).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a tournament selection strategy with the given tournament
    /// size.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `tournament_size` is 0. A size of
    /// 1 degenerates to uniform random selection.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(EvoError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    /// The number of participants per tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let mut best_idx = rng.index(population.len());
        for _ in 1..self.tournament_size {
            let challenger = rng.index(population.len());
            if population[challenger].fitness > population[best_idx].fitness {
                best_idx = challenger;
            }
        }
        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        // Binary tournaments are the common default.
        Self { tournament_size: 2 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if population.is_empty() {
            return Err(EvoError::EmptyPopulation);
        }

        Ok((0..num_to_select)
            .map(|_| population[self.run_tournament(population, rng)].clone())
            .collect())
    }
}
