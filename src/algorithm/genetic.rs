//! # Genetic Algorithm
//!
//! Generational GA over real vectors: parent selection (tournament,
//! roulette-wheel or rank), arithmetic crossover producing a
//! complementary pair, per-gene Gaussian mutation clamped to bounds, and
//! single-individual elitism. Converges when the generation budget is
//! exhausted.

use tracing::{debug, trace};

use crate::error::{EvoError, Result};
use crate::population::{self, Individual};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;
use crate::stats::AlgorithmStats;

use super::params::{AlgorithmParams, GeneticParams};
use super::Algorithm;

/// Genetic algorithm engine.
///
/// Fitness is kept in the internal maximize convention (minimization
/// problems are negated by [`Problem::fitness`]).
#[derive(Debug)]
pub struct GeneticAlgorithm {
    problem: Problem,
    params: GeneticParams,
    selection: Box<dyn SelectionStrategy>,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    best: Option<Individual>,
    stats: AlgorithmStats,
}

fn make_rng(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

impl GeneticAlgorithm {
    /// Creates an engine for `problem` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid parameters.
    pub fn new(problem: Problem, params: GeneticParams) -> Result<Self> {
        params.validate()?;
        let selection = params.selection.build()?;
        let rng = make_rng(params.common.seed);
        Ok(Self {
            problem,
            params,
            selection,
            rng,
            population: Vec::new(),
            best: None,
            stats: AlgorithmStats::new(),
        })
    }

    /// Creates an engine from the tagged parameter union.
    ///
    /// # Errors
    ///
    /// Rejects parameter sets of a different engine family.
    pub fn from_params(problem: Problem, params: AlgorithmParams) -> Result<Self> {
        match params {
            AlgorithmParams::Genetic(params) => Self::new(problem, params),
            other => Err(EvoError::ParamsMismatch {
                expected: "genetic",
                actual: other.kind(),
            }),
        }
    }

    /// The current parameters.
    pub fn params(&self) -> &GeneticParams {
        &self.params
    }

    /// Per-gene Gaussian mutation with a deviation of 10% of the
    /// dimension's bound range, clamped back into bounds.
    fn mutate(&mut self, genotype: &mut [f64]) {
        for (i, bound) in self.problem.bounds().iter().enumerate() {
            if self.rng.chance(self.params.mutation_rate) {
                genotype[i] += self.rng.normal(0.0, 0.1 * bound.range());
            }
        }
        self.problem.repair(genotype);
    }

    /// Arithmetic crossover: `α·p1 + (1-α)·p2` and its complement.
    fn crossover(&mut self, p1: &[f64], p2: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let alpha = self.rng.uniform(0.0, 1.0);
        let c1 = p1
            .iter()
            .zip(p2.iter())
            .map(|(a, b)| alpha * a + (1.0 - alpha) * b)
            .collect();
        let c2 = p1
            .iter()
            .zip(p2.iter())
            .map(|(a, b)| (1.0 - alpha) * a + alpha * b)
            .collect();
        (c1, c2)
    }

    fn update_best(&mut self) {
        if let Some(idx) = population::best_index(&self.population) {
            let candidate = &self.population[idx];
            let improved = self
                .best
                .as_ref()
                .map_or(true, |best| candidate.fitness > best.fitness);
            if improved {
                self.best = Some(candidate.clone());
            }
        }
    }

    fn record_stats(&mut self) {
        let best = self.best.as_ref().map_or(0.0, |b| b.fitness);
        self.stats.record(
            best,
            population::average_fitness(&self.population),
            population::diversity(&self.population),
        );
    }
}

impl Algorithm for GeneticAlgorithm {
    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    fn problem(&self) -> &Problem {
        &self.problem
    }

    fn initialize_population(&mut self) -> Result<()> {
        let size = self.params.common.population_size;
        let genotypes: Vec<Vec<f64>> = (0..size)
            .map(|_| self.problem.generate_random_solution(&mut self.rng))
            .collect();
        let fitness = self
            .problem
            .fitness_batch(&genotypes, self.params.common.parallel_threshold)?;

        self.population = genotypes
            .into_iter()
            .zip(fitness)
            .map(|(genotype, fitness)| Individual::new(genotype, fitness))
            .collect();
        self.best = None;
        self.stats.reset();
        self.update_best();
        debug!(
            population_size = size,
            problem = self.problem.name(),
            "initialized genetic algorithm population"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            self.initialize_population()?;
        }

        // Elitism: the best of the previous generation survives
        // unconditionally; the rest of the population is replaced.
        let elite = population::best_index(&self.population)
            .map(|idx| self.population[idx].clone())
            .ok_or(EvoError::EmptyPopulation)?;

        let size = self.params.common.population_size;
        let mut offspring: Vec<Vec<f64>> = Vec::with_capacity(size);
        while offspring.len() + 1 < size {
            let parents = self.selection.select(&self.population, 2, &mut self.rng)?;
            let (mut c1, mut c2) = if self.rng.chance(self.params.crossover_rate) {
                self.crossover(&parents[0].genotype, &parents[1].genotype)
            } else {
                (parents[0].genotype.clone(), parents[1].genotype.clone())
            };
            self.mutate(&mut c1);
            self.mutate(&mut c2);
            offspring.push(c1);
            if offspring.len() + 1 < size {
                offspring.push(c2);
            }
        }

        let fitness = self
            .problem
            .fitness_batch(&offspring, self.params.common.parallel_threshold)?;

        let mut next: Vec<Individual> = Vec::with_capacity(size);
        next.push(elite);
        next.extend(
            offspring
                .into_iter()
                .zip(fitness)
                .map(|(genotype, fitness)| Individual::new(genotype, fitness)),
        );
        self.population = next;

        self.update_best();
        self.record_stats();
        trace!(
            generation = self.stats.current_generation,
            best = self.stats.best_fitness,
            diversity = self.stats.diversity,
            "genetic algorithm step"
        );
        Ok(())
    }

    fn population(&self) -> &[Individual] {
        &self.population
    }

    fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    fn best_raw(&self) -> Option<f64> {
        self.best
            .as_ref()
            .map(|b| self.problem.raw_from_fitness(b.fitness))
    }

    fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.population.clear();
        self.best = None;
        self.stats.reset();
        self.rng = make_rng(self.params.common.seed);
    }

    fn set_params(&mut self, params: AlgorithmParams) -> Result<()> {
        let params = match params {
            AlgorithmParams::Genetic(params) => params,
            other => {
                return Err(EvoError::ParamsMismatch {
                    expected: "genetic",
                    actual: other.kind(),
                })
            }
        };
        params.validate()?;

        let reinitialize = !self.population.is_empty()
            && params.common.population_size != self.params.common.population_size;
        self.selection = params.selection.build()?;
        self.params = params;
        if reinitialize {
            debug!("population size changed, re-initializing");
            self.initialize_population()?;
        }
        Ok(())
    }

    fn has_converged(&self) -> bool {
        self.stats.current_generation >= self.params.common.max_generations
    }

    fn max_generations(&self) -> usize {
        self.params.common.max_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::benchmarks::ProblemId;

    fn engine(seed: u64) -> GeneticAlgorithm {
        let mut params = GeneticParams::default();
        params.common.population_size = 30;
        params.common.max_generations = 20;
        params.common.seed = Some(seed);
        GeneticAlgorithm::new(Problem::benchmark(ProblemId::Sphere, 2), params).unwrap()
    }

    #[test]
    fn test_initialize_population_size() {
        let mut ga = engine(1);
        ga.initialize_population().unwrap();
        assert_eq!(ga.population().len(), 30);
        assert!(ga.best().is_some());
        assert_eq!(ga.stats().current_generation, 0);
    }

    #[test]
    fn test_step_implicitly_initializes() {
        let mut ga = engine(2);
        assert!(ga.population().is_empty());
        ga.step().unwrap();
        assert_eq!(ga.population().len(), 30);
        assert_eq!(ga.stats().current_generation, 1);
    }

    #[test]
    fn test_best_is_monotone() {
        let mut ga = engine(3);
        ga.initialize_population().unwrap();
        let mut previous = f64::NEG_INFINITY;
        for _ in 0..20 {
            ga.step().unwrap();
            let best = ga.best().unwrap().fitness;
            assert!(best >= previous);
            previous = best;
        }
    }

    #[test]
    fn test_elite_keeps_population_best_from_regressing() {
        let mut ga = engine(4);
        ga.initialize_population().unwrap();
        let mut previous = f64::NEG_INFINITY;
        for _ in 0..10 {
            ga.step().unwrap();
            let pop_best = ga
                .population()
                .iter()
                .map(|ind| ind.fitness)
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(pop_best >= previous);
            previous = pop_best;
        }
    }

    #[test]
    fn test_converges_at_generation_budget() {
        let mut ga = engine(5);
        ga.run().unwrap();
        assert!(ga.has_converged());
        assert_eq!(ga.stats().current_generation, 20);
        assert_eq!(ga.stats().history.len(), 20);
    }

    #[test]
    fn test_set_params_population_change_reinitializes() {
        let mut ga = engine(6);
        ga.initialize_population().unwrap();
        ga.step().unwrap();

        let mut params = ga.params().clone();
        params.common.population_size = 10;
        ga.set_params(AlgorithmParams::Genetic(params)).unwrap();

        assert_eq!(ga.population().len(), 10);
        assert_eq!(ga.stats().current_generation, 0);
    }

    #[test]
    fn test_set_params_rate_change_keeps_population() {
        let mut ga = engine(7);
        ga.initialize_population().unwrap();
        ga.step().unwrap();

        let mut params = ga.params().clone();
        params.mutation_rate = 0.5;
        ga.set_params(AlgorithmParams::Genetic(params)).unwrap();

        assert_eq!(ga.stats().current_generation, 1);
        assert_eq!(ga.population().len(), 30);
    }

    #[test]
    fn test_rejects_foreign_params() {
        let mut ga = engine(8);
        let foreign = AlgorithmParams::default_for(crate::algorithm::AlgorithmId::BeeColony);
        assert!(ga.set_params(foreign).is_err());
    }

    #[test]
    fn test_reset_returns_to_uninitialized() {
        let mut ga = engine(9);
        ga.initialize_population().unwrap();
        ga.step().unwrap();
        ga.reset();

        assert!(ga.population().is_empty());
        assert!(ga.best().is_none());
        assert_eq!(ga.stats().current_generation, 0);
        assert!(ga.stats().history.is_empty());
    }

    #[test]
    fn test_population_stays_in_bounds() {
        let mut ga = engine(10);
        ga.run().unwrap();
        for individual in ga.population() {
            assert!(ga.problem().is_in_bounds(&individual.genotype));
        }
    }
}
