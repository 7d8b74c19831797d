//! # Differential Evolution
//!
//! Classic DE over real vectors: per-target mutants built from scaled
//! difference vectors (rand/1, best/1, rand/2, best/2), binomial
//! crossover with one forced mutant gene, and greedy one-to-one
//! replacement where ties go to the trial. Converges when population
//! diversity collapses below the configured threshold.

use tracing::{debug, trace};

use crate::error::{EvoError, Result};
use crate::population::{self, Individual};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::stats::AlgorithmStats;

use super::params::{AlgorithmParams, DeStrategy, DifferentialEvolutionParams};
use super::Algorithm;

/// Differential evolution engine.
///
/// Fitness is kept in the internal maximize convention.
#[derive(Debug)]
pub struct DifferentialEvolution {
    problem: Problem,
    params: DifferentialEvolutionParams,
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

impl DifferentialEvolution {
    /// Creates an engine for `problem` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid parameters.
    pub fn new(problem: Problem, params: DifferentialEvolutionParams) -> Result<Self> {
        params.validate()?;
        let rng = make_rng(params.common.seed);
        Ok(Self {
            problem,
            params,
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
            AlgorithmParams::DifferentialEvolution(params) => Self::new(problem, params),
            other => Err(EvoError::ParamsMismatch {
                expected: "differential-evolution",
                actual: other.kind(),
            }),
        }
    }

    /// The current parameters.
    pub fn params(&self) -> &DifferentialEvolutionParams {
        &self.params
    }

    /// Draws `count` distinct indices from `0..len`, all different from
    /// `exclude`, by rejection sampling.
    fn select_distinct(&mut self, count: usize, exclude: usize, len: usize) -> Vec<usize> {
        let mut indices = Vec::with_capacity(count);
        while indices.len() < count {
            let idx = self.rng.index(len);
            if idx != exclude && !indices.contains(&idx) {
                indices.push(idx);
            }
        }
        indices
    }

    /// Builds the mutant vector for `target_idx` under the configured
    /// strategy.
    fn mutant(&mut self, target_idx: usize, best_idx: usize) -> Vec<f64> {
        let f = self.params.scaling_factor;
        let n = self.population.len();
        let dim = self.problem.dimension();
        let donors = self.select_distinct(self.params.strategy.donors(), target_idx, n);
        let gene = |idx: usize, j: usize| self.population[idx].genotype[j];

        (0..dim)
            .map(|j| match self.params.strategy {
                DeStrategy::Rand1 => {
                    gene(donors[0], j) + f * (gene(donors[1], j) - gene(donors[2], j))
                }
                DeStrategy::Best1 => {
                    gene(best_idx, j) + f * (gene(donors[0], j) - gene(donors[1], j))
                }
                DeStrategy::Rand2 => {
                    gene(donors[0], j)
                        + f * (gene(donors[1], j) - gene(donors[2], j))
                        + f * (gene(donors[3], j) - gene(donors[4], j))
                }
                DeStrategy::Best2 => {
                    gene(best_idx, j)
                        + f * (gene(donors[0], j) - gene(donors[1], j))
                        + f * (gene(donors[2], j) - gene(donors[3], j))
                }
            })
            .collect()
    }

    /// Binomial crossover: every gene comes from the mutant with
    /// probability CR, and the forced index guarantees at least one does.
    fn crossover(&mut self, target: &[f64], mutant: &[f64]) -> Vec<f64> {
        let dim = target.len();
        let forced = self.rng.index(dim);
        (0..dim)
            .map(|j| {
                if j == forced || self.rng.chance(self.params.crossover_rate) {
                    mutant[j]
                } else {
                    target[j]
                }
            })
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

impl Algorithm for DifferentialEvolution {
    fn name(&self) -> &'static str {
        "Differential Evolution"
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
            strategy = ?self.params.strategy,
            problem = self.problem.name(),
            "initialized differential evolution population"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            self.initialize_population()?;
        }

        let best_idx = population::best_index(&self.population).ok_or(EvoError::EmptyPopulation)?;

        let mut trials: Vec<Vec<f64>> = Vec::with_capacity(self.population.len());
        for i in 0..self.population.len() {
            let mutant = self.mutant(i, best_idx);
            let target = self.population[i].genotype.clone();
            let mut trial = self.crossover(&target, &mutant);
            self.problem.repair(&mut trial);
            trials.push(trial);
        }

        let fitness = self
            .problem
            .fitness_batch(&trials, self.params.common.parallel_threshold)?;

        // Greedy one-to-one replacement, applied after the whole
        // generation's trials are built. Ties go to the trial.
        for (i, (trial, trial_fitness)) in trials.into_iter().zip(fitness).enumerate() {
            if trial_fitness >= self.population[i].fitness {
                self.population[i] = Individual::new(trial, trial_fitness);
            }
        }

        self.update_best();
        self.record_stats();
        trace!(
            generation = self.stats.current_generation,
            best = self.stats.best_fitness,
            diversity = self.stats.diversity,
            "differential evolution step"
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
            AlgorithmParams::DifferentialEvolution(params) => params,
            other => {
                return Err(EvoError::ParamsMismatch {
                    expected: "differential-evolution",
                    actual: other.kind(),
                })
            }
        };
        params.validate()?;

        let reinitialize = !self.population.is_empty()
            && params.common.population_size != self.params.common.population_size;
        self.params = params;
        if reinitialize {
            debug!("population size changed, re-initializing");
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
