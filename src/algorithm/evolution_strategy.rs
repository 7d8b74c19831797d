//! # Evolution Strategy
//!
//! (μ+λ) / (μ,λ) evolution strategy with self-adaptive per-dimension step
//! sizes: every offspring rescales its inherited step sizes by
//! `exp(τ·N(0,1))` with `τ = 1/√n` before perturbing its genes. Plus
//! selection merges parents and offspring; comma selection keeps only
//! offspring, discarding parents even when they are better, to force
//! exploration. Converges when population diversity collapses below the
//! configured threshold.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{EvoError, Result};
use crate::population::{self, Individual};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::stats::AlgorithmStats;

use super::params::{AlgorithmParams, EsScheme, EvolutionStrategyParams};
use super::Algorithm;

/// Step sizes never adapt below this floor.
const MIN_STEP_SIZE: f64 = 1e-10;

/// Evolution strategy engine.
///
/// Fitness is kept in the internal maximize convention. The population
/// holds the μ parents; each parent carries one step size per dimension,
/// stored alongside the population.
#[derive(Debug)]
pub struct EvolutionStrategy {
    problem: Problem,
    params: EvolutionStrategyParams,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    step_sizes: Vec<Vec<f64>>,
    best: Option<Individual>,
    stats: AlgorithmStats,
}

fn make_rng(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

impl EvolutionStrategy {
    /// Creates an engine for `problem` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid parameters.
    pub fn new(problem: Problem, params: EvolutionStrategyParams) -> Result<Self> {
        params.validate()?;
        let rng = make_rng(params.common.seed);
        Ok(Self {
            problem,
            params,
            rng,
            population: Vec::new(),
            step_sizes: Vec::new(),
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
            AlgorithmParams::EvolutionStrategy(params) => Self::new(problem, params),
            other => Err(EvoError::ParamsMismatch {
                expected: "evolution-strategy",
                actual: other.kind(),
            }),
        }
    }

    /// The current parameters.
    pub fn params(&self) -> &EvolutionStrategyParams {
        &self.params
    }

    /// Initial step size per dimension: 10% of the bound range.
    fn initial_step_sizes(&self) -> Vec<f64> {
        self.problem
            .bounds()
            .iter()
            .map(|b| 0.1 * b.range())
            .collect()
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

impl Algorithm for EvolutionStrategy {
    fn name(&self) -> &'static str {
        "Evolution Strategy"
    }

    fn problem(&self) -> &Problem {
        &self.problem
    }

    fn initialize_population(&mut self) -> Result<()> {
        let mu = self.params.mu();
        let genotypes: Vec<Vec<f64>> = (0..mu)
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
        self.step_sizes = vec![self.initial_step_sizes(); mu];
        self.best = None;
        self.stats.reset();
        self.update_best();
        debug!(
            mu,
            lambda = self.params.lambda,
            problem = self.problem.name(),
            "initialized evolution strategy population"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            self.initialize_population()?;
        }

        let tau = 1.0 / (self.problem.dimension() as f64).sqrt();
        let lambda = self.params.lambda;

        // Mutate first, evaluate as a batch afterwards.
        let mut offspring_genotypes: Vec<Vec<f64>> = Vec::with_capacity(lambda);
        let mut offspring_sigmas: Vec<Vec<f64>> = Vec::with_capacity(lambda);
        for _ in 0..lambda {
            let parent = self.rng.index(self.population.len());
            let mut sigma = self.step_sizes[parent].clone();
            let mut genotype = self.population[parent].genotype.clone();
            for i in 0..genotype.len() {
                sigma[i] = (sigma[i] * (tau * self.rng.normal(0.0, 1.0)).exp()).max(MIN_STEP_SIZE);
                genotype[i] += sigma[i] * self.rng.normal(0.0, 1.0);
            }
            self.problem.repair(&mut genotype);
            offspring_genotypes.push(genotype);
            offspring_sigmas.push(sigma);
        }

        let fitness = self
            .problem
            .fitness_batch(&offspring_genotypes, self.params.common.parallel_threshold)?;
        let mut pool: Vec<(Individual, Vec<f64>)> = offspring_genotypes
            .into_iter()
            .zip(fitness)
            .map(|(genotype, fitness)| Individual::new(genotype, fitness))
            .zip(offspring_sigmas)
            .collect();

        // Plus selection merges the parents into the pool; comma discards
        // them even when they are better.
        if self.params.scheme == EsScheme::Plus {
            let parents = self.population.drain(..).zip(self.step_sizes.drain(..));
            pool.extend(parents);
        }

        pool.sort_by(|(a, _), (b, _)| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(Ordering::Equal)
        });
        pool.truncate(self.params.mu());

        let (population, step_sizes): (Vec<_>, Vec<_>) = pool.into_iter().unzip();
        self.population = population;
        self.step_sizes = step_sizes;

        self.update_best();
        self.record_stats();
        trace!(
            generation = self.stats.current_generation,
            best = self.stats.best_fitness,
            diversity = self.stats.diversity,
            "evolution strategy step"
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
        self.step_sizes.clear();
        self.best = None;
        self.stats.reset();
        self.rng = make_rng(self.params.common.seed);
    }

    fn set_params(&mut self, params: AlgorithmParams) -> Result<()> {
        let params = match params {
            AlgorithmParams::EvolutionStrategy(params) => params,
            other => {
                return Err(EvoError::ParamsMismatch {
                    expected: "evolution-strategy",
                    actual: other.kind(),
                })
            }
        };
        params.validate()?;

        let reinitialize = !self.population.is_empty() && params.mu() != self.params.mu();
        self.params = params;
        if reinitialize {
            debug!("mu changed, re-initializing");
            self.initialize_population()?;
        }
        Ok(())
    }

    fn has_converged(&self) -> bool {
        !self.population.is_empty()
            && population::diversity(&self.population) < self.params.diversity_threshold
    }

    fn max_generations(&self) -> usize {
        self.params.common.max_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::benchmarks::ProblemId;

    fn engine(scheme: EsScheme, seed: u64) -> EvolutionStrategy {
        let mut params = EvolutionStrategyParams::default();
        params.common.population_size = 10;
        params.lambda = 40;
        params.common.max_generations = 30;
        params.common.seed = Some(seed);
        params.scheme = scheme;
        EvolutionStrategy::new(Problem::benchmark(ProblemId::Sphere, 3), params).unwrap()
    }

    #[test]
    fn test_population_size_follows_mu() {
        let mut es = engine(EsScheme::Plus, 1);
        es.initialize_population().unwrap();
        assert_eq!(es.population().len(), 10);
        es.step().unwrap();
        assert_eq!(es.population().len(), 10);
    }

    #[test]
    fn test_best_is_monotone_under_comma_selection() {
        // Comma selection may regress the population; the best-so-far
        // individual must not.
        let mut es = engine(EsScheme::Comma, 2);
        es.initialize_population().unwrap();
        let mut previous = f64::NEG_INFINITY;
        for _ in 0..30 {
            es.step().unwrap();
            let best = es.best().unwrap().fitness;
            assert!(best >= previous);
            previous = best;
        }
    }

    #[test]
    fn test_plus_selection_population_best_never_regresses() {
        let mut es = engine(EsScheme::Plus, 3);
        es.initialize_population().unwrap();
        let mut previous = f64::NEG_INFINITY;
        for _ in 0..15 {
            es.step().unwrap();
            let pop_best = es
                .population()
                .iter()
                .map(|ind| ind.fitness)
                .fold(f64::NEG_INFINITY, f64::max);
            assert!(pop_best >= previous);
            previous = pop_best;
        }
    }

    #[test]
    fn test_step_sizes_stay_above_floor() {
        let mut es = engine(EsScheme::Plus, 4);
        es.run().unwrap();
        for sigma in &es.step_sizes {
            for &s in sigma {
                assert!(s >= MIN_STEP_SIZE);
            }
        }
    }

    #[test]
    fn test_diversity_convergence_guarded_before_init() {
        let es = engine(EsScheme::Plus, 5);
        assert!(!es.has_converged());
    }

    #[test]
    fn test_mu_change_reinitializes() {
        let mut es = engine(EsScheme::Plus, 6);
        es.initialize_population().unwrap();
        es.step().unwrap();

        let mut params = es.params().clone();
        params.common.population_size = 5;
        es.set_params(AlgorithmParams::EvolutionStrategy(params))
            .unwrap();

        assert_eq!(es.population().len(), 5);
        assert_eq!(es.stats().current_generation, 0);
    }

    #[test]
    fn test_offspring_respect_bounds() {
        let mut es = engine(EsScheme::Comma, 7);
        es.initialize_population().unwrap();
        for _ in 0..5 {
            es.step().unwrap();
            for individual in es.population() {
                assert!(es.problem().is_in_bounds(&individual.genotype));
            }
        }
    }
}
