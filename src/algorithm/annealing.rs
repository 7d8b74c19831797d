//! # Simulated Annealing
//!
//! Single-solution search reported as a length-1 population for interface
//! uniformity. Each iteration perturbs every dimension independently with
//! 50% probability by a fraction of that dimension's bound range, accepts
//! improvements outright and degradations with the Metropolis probability
//! `exp(-Δ/T)`, then cools the temperature geometrically. The best
//! solution ever visited is tracked independently of the current (and
//! possibly worse, accepted) one.
//!
//! Like the bee colony, the engine stores raw objective values and
//! switches on the problem direction when comparing. Diversity is always
//! reported as 0 for this single-point search.

use tracing::{debug, trace};

use crate::error::{EvoError, Result};
use crate::population::Individual;
use crate::problem::{Direction, Problem};
use crate::rng::RandomNumberGenerator;
use crate::stats::AlgorithmStats;

use super::params::{AlgorithmParams, AnnealingParams};
use super::Algorithm;

/// Simulated annealing engine.
#[derive(Debug)]
pub struct SimulatedAnnealing {
    problem: Problem,
    params: AnnealingParams,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    temperature: f64,
    best: Option<Individual>,
    stats: AlgorithmStats,
}

fn make_rng(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

impl SimulatedAnnealing {
    /// Creates an engine for `problem` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid parameters.
    pub fn new(problem: Problem, params: AnnealingParams) -> Result<Self> {
        params.validate()?;
        let rng = make_rng(params.common.seed);
        let temperature = params.initial_temperature;
        Ok(Self {
            problem,
            params,
            rng,
            population: Vec::new(),
            temperature,
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
            AlgorithmParams::Annealing(params) => Self::new(problem, params),
            other => Err(EvoError::ParamsMismatch {
                expected: "simulated-annealing",
                actual: other.kind(),
            }),
        }
    }

    /// The current parameters.
    pub fn params(&self) -> &AnnealingParams {
        &self.params
    }

    /// The current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Builds a neighbor of the current solution: every dimension is
    /// perturbed independently with 50% probability by a uniform step of
    /// up to `neighborhood_size` of its bound range, then repaired.
    fn neighbor(&mut self) -> Result<(Vec<f64>, f64)> {
        let mut candidate = self.population[0].genotype.clone();
        for (i, bound) in self.problem.bounds().iter().enumerate() {
            if self.rng.chance(0.5) {
                let magnitude = self.params.neighborhood_size * bound.range();
                candidate[i] += self.rng.uniform(-magnitude, magnitude);
            }
        }
        self.problem.repair(&mut candidate);
        let fitness = self.problem.evaluate(&candidate)?;
        Ok((candidate, fitness))
    }

    /// Metropolis acceptance: improvements always pass, degradations pass
    /// with probability `exp(-Δ/T)` where Δ is the (positive) quality
    /// loss in the problem's direction.
    fn accepts(&mut self, candidate_fitness: f64) -> bool {
        let current = self.population[0].fitness;
        if self.problem.is_improvement(candidate_fitness, current) {
            return true;
        }
        let delta = match self.problem.direction() {
            Direction::Minimize => candidate_fitness - current,
            Direction::Maximize => current - candidate_fitness,
        };
        let probability = (-delta / self.temperature).exp();
        self.rng.chance(probability)
    }

    fn update_best(&mut self) {
        let current = &self.population[0];
        let improved = self.best.as_ref().map_or(true, |best| {
            self.problem.is_improvement(current.fitness, best.fitness)
        });
        if improved {
            self.best = Some(current.clone());
        }
    }

    fn record_stats(&mut self) {
        let best = self.best.as_ref().map_or(0.0, |b| b.fitness);
        // Single-point search: the average is the current solution's
        // fitness and diversity is always 0.
        self.stats
            .record(best, self.population[0].fitness, 0.0);
    }
}

impl Algorithm for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn problem(&self) -> &Problem {
        &self.problem
    }

    fn initialize_population(&mut self) -> Result<()> {
        let genotype = self.problem.generate_random_solution(&mut self.rng);
        let fitness = self.problem.evaluate(&genotype)?;
        self.population = vec![Individual::new(genotype, fitness)];
        self.temperature = self.params.initial_temperature;
        self.best = None;
        self.stats.reset();
        self.update_best();
        debug!(
            initial_temperature = self.temperature,
            problem = self.problem.name(),
            "initialized simulated annealing"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            self.initialize_population()?;
        }

        let (candidate, fitness) = self.neighbor()?;
        if self.accepts(fitness) {
            self.population[0] = Individual::new(candidate, fitness);
        }

        self.update_best();
        self.temperature *= self.params.cooling_rate;
        self.record_stats();
        trace!(
            generation = self.stats.current_generation,
            best = self.stats.best_fitness,
            temperature = self.temperature,
            "simulated annealing step"
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
        // Raw objective values are stored directly.
        self.best.as_ref().map(|b| b.fitness)
    }

    fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.population.clear();
        self.temperature = self.params.initial_temperature;
        self.best = None;
        self.stats.reset();
        self.rng = make_rng(self.params.common.seed);
    }

    fn set_params(&mut self, params: AlgorithmParams) -> Result<()> {
        let params = match params {
            AlgorithmParams::Annealing(params) => params,
            other => {
                return Err(EvoError::ParamsMismatch {
                    expected: "simulated-annealing",
                    actual: other.kind(),
                })
            }
        };
        params.validate()?;
        // The population is always a single slot, so parameter changes
        // never force re-initialization; the cooling schedule applies
        // from the next step.
        self.params = params;
        Ok(())
    }

    fn has_converged(&self) -> bool {
        self.stats.current_generation >= self.params.common.max_generations
            || self.temperature < self.params.min_temperature
    }

    fn max_generations(&self) -> usize {
        self.params.common.max_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::benchmarks::ProblemId;
    use approx::assert_relative_eq;

    fn engine(seed: u64) -> SimulatedAnnealing {
        let mut params = AnnealingParams::default();
        params.common.max_generations = 200;
        params.common.seed = Some(seed);
        SimulatedAnnealing::new(Problem::benchmark(ProblemId::Sphere, 3), params).unwrap()
    }

    #[test]
    fn test_population_is_always_length_one() {
        let mut sa = engine(1);
        sa.initialize_population().unwrap();
        assert_eq!(sa.population().len(), 1);
        for _ in 0..10 {
            sa.step().unwrap();
            assert_eq!(sa.population().len(), 1);
        }
    }

    #[test]
    fn test_temperature_follows_geometric_schedule() {
        let mut sa = engine(2);
        sa.initialize_population().unwrap();
        let t0 = sa.params().initial_temperature;
        let rate = sa.params().cooling_rate;
        for k in 1..=50u32 {
            sa.step().unwrap();
            assert_relative_eq!(
                sa.temperature(),
                t0 * rate.powi(k as i32),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_best_is_monotone_despite_acceptance() {
        // The current solution may worsen through Metropolis acceptance;
        // the best-so-far must not.
        let mut sa = engine(3);
        sa.initialize_population().unwrap();
        let mut previous = f64::INFINITY;
        for _ in 0..200 {
            sa.step().unwrap();
            let best = sa.best().unwrap().fitness;
            assert!(best <= previous);
            previous = best;
        }
    }

    #[test]
    fn test_diversity_reported_as_zero() {
        let mut sa = engine(4);
        sa.run().unwrap();
        assert!(sa.stats().history.diversity.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_converges_below_min_temperature() {
        let mut params = AnnealingParams::default();
        params.common.max_generations = 100_000;
        params.common.seed = Some(5);
        params.initial_temperature = 1.0;
        params.cooling_rate = 0.5;
        params.min_temperature = 1e-3;
        let mut sa =
            SimulatedAnnealing::new(Problem::benchmark(ProblemId::Sphere, 2), params).unwrap();
        sa.run().unwrap();
        assert!(sa.has_converged());
        assert!(sa.temperature() < 1e-3);
        // 1.0 * 0.5^k < 1e-3 first holds at k = 10.
        assert_eq!(sa.stats().current_generation, 10);
    }

    #[test]
    fn test_solution_stays_in_bounds() {
        let mut sa = engine(6);
        sa.initialize_population().unwrap();
        for _ in 0..50 {
            sa.step().unwrap();
            assert!(sa.problem().is_in_bounds(&sa.population()[0].genotype));
        }
    }
}
