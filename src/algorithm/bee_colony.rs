//! # Artificial Bee Colony
//!
//! Food-source search in three phases per generation: every employed bee
//! probes a neighbor of its source, onlooker bees distribute exactly one
//! extra attempt per source weighted by normalized quality, and scout
//! bees abandon sources whose trial counters exceed the limit. Neighbor
//! candidates modify a single random dimension toward (or away from) a
//! random partner source.
//!
//! Unlike the negating engines, the colony stores raw objective values
//! and switches on the problem direction when comparing; the onlooker
//! weights invert minimization values with a `+1` offset so the
//! denominators stay positive even when all sources tie.

use tracing::{debug, trace};

use crate::error::{EvoError, Result};
use crate::population::{self, Individual};
use crate::problem::{Direction, Problem};
use crate::rng::RandomNumberGenerator;
use crate::stats::AlgorithmStats;

use super::params::{AlgorithmParams, BeeColonyParams};
use super::Algorithm;

/// Artificial bee colony engine.
///
/// `population()` exposes the food sources; fitness values are raw
/// objective values in the problem's own direction.
#[derive(Debug)]
pub struct BeeColony {
    problem: Problem,
    params: BeeColonyParams,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    trials: Vec<u32>,
    best: Option<Individual>,
    stats: AlgorithmStats,
}

fn make_rng(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

impl BeeColony {
    /// Creates an engine for `problem` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid parameters.
    pub fn new(problem: Problem, params: BeeColonyParams) -> Result<Self> {
        params.validate()?;
        let rng = make_rng(params.common.seed);
        Ok(Self {
            problem,
            params,
            rng,
            population: Vec::new(),
            trials: Vec::new(),
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
            AlgorithmParams::BeeColony(params) => Self::new(problem, params),
            other => Err(EvoError::ParamsMismatch {
                expected: "bee-colony",
                actual: other.kind(),
            }),
        }
    }

    /// The current parameters.
    pub fn params(&self) -> &BeeColonyParams {
        &self.params
    }

    /// Builds a neighbor of source `i`: one random dimension moved by
    /// `φ·(x - partner)` with φ uniform in the scaling interval and the
    /// partner a distinct random source, then repaired and evaluated.
    fn neighbor(&mut self, i: usize) -> Result<(Vec<f64>, f64)> {
        let n = self.population.len();
        let mut candidate = self.population[i].genotype.clone();
        let d = self.rng.index(candidate.len());

        let mut partner = self.rng.index(n);
        while partner == i {
            partner = self.rng.index(n);
        }

        let sf = self.params.scaling_factor;
        let phi = self.rng.uniform(-sf, sf);
        candidate[d] += phi * (candidate[d] - self.population[partner].genotype[d]);
        self.problem.repair(&mut candidate);

        let fitness = self.problem.evaluate(&candidate)?;
        Ok((candidate, fitness))
    }

    /// Greedy replacement: a better neighbor takes the source and resets
    /// its trial counter; otherwise the counter increments.
    fn try_replace(&mut self, i: usize) -> Result<()> {
        let (candidate, fitness) = self.neighbor(i)?;
        if self.problem.is_improvement(fitness, self.population[i].fitness) {
            self.population[i] = Individual::new(candidate, fitness);
            self.trials[i] = 0;
        } else {
            self.trials[i] += 1;
        }
        Ok(())
    }

    /// Onlooker weights: quality normalized positive. Minimization
    /// inverts through `1/(1 + f - min(0, f_min))`; maximization shifts
    /// by `f - f_min + 1`. Both keep every weight strictly positive, so a
    /// population of equal quality degenerates to uniform selection.
    fn onlooker_weights(&self) -> Vec<f64> {
        let f_min = self
            .population
            .iter()
            .map(|ind| ind.fitness)
            .fold(f64::INFINITY, f64::min);
        self.population
            .iter()
            .map(|ind| match self.problem.direction() {
                Direction::Minimize => 1.0 / (1.0 + ind.fitness - f_min.min(0.0)),
                Direction::Maximize => ind.fitness - f_min + 1.0,
            })
            .collect()
    }

    fn pick_weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut draw = self.rng.uniform(0.0, total);
        for (i, w) in weights.iter().enumerate() {
            draw -= w;
            if draw <= 0.0 {
                return i;
            }
        }
        weights.len() - 1
    }

    fn population_best_index(&self) -> Option<usize> {
        match self.problem.direction() {
            Direction::Minimize => population::worst_index(&self.population),
            Direction::Maximize => population::best_index(&self.population),
        }
    }

    fn update_best(&mut self) {
        if let Some(idx) = self.population_best_index() {
            let candidate = &self.population[idx];
            let improved = self.best.as_ref().map_or(true, |best| {
                self.problem.is_improvement(candidate.fitness, best.fitness)
            });
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

impl Algorithm for BeeColony {
    fn name(&self) -> &'static str {
        "Artificial Bee Colony"
    }

    fn problem(&self) -> &Problem {
        &self.problem
    }

    fn initialize_population(&mut self) -> Result<()> {
        let size = self.params.common.population_size;
        let mut population = Vec::with_capacity(size);
        for _ in 0..size {
            let genotype = self.problem.generate_random_solution(&mut self.rng);
            let fitness = self.problem.evaluate(&genotype)?;
            population.push(Individual::new(genotype, fitness));
        }
        self.population = population;
        self.trials = vec![0; size];
        self.best = None;
        self.stats.reset();
        self.update_best();
        debug!(
            food_sources = size,
            limit = self.params.limit,
            problem = self.problem.name(),
            "initialized bee colony"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            self.initialize_population()?;
        }

        // Employed-bee phase: one neighbor per food source.
        for i in 0..self.population.len() {
            self.try_replace(i)?;
        }

        // Onlooker-bee phase: exactly population_size additional
        // attempts, each probabilistically targeting a source.
        for _ in 0..self.population.len() {
            let weights = self.onlooker_weights();
            let i = self.pick_weighted(&weights);
            self.try_replace(i)?;
        }

        // Scout-bee phase: exhausted sources restart from fresh random
        // solutions.
        for i in 0..self.population.len() {
            if self.trials[i] > self.params.limit as u32 {
                let genotype = self.problem.generate_random_solution(&mut self.rng);
                let fitness = self.problem.evaluate(&genotype)?;
                self.population[i] = Individual::new(genotype, fitness);
                self.trials[i] = 0;
            }
        }

        self.update_best();
        self.record_stats();
        trace!(
            generation = self.stats.current_generation,
            best = self.stats.best_fitness,
            diversity = self.stats.diversity,
            "bee colony step"
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
        // The colony already stores raw objective values.
        self.best.as_ref().map(|b| b.fitness)
    }

    fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.population.clear();
        self.trials.clear();
        self.best = None;
        self.stats.reset();
        self.rng = make_rng(self.params.common.seed);
    }

    fn set_params(&mut self, params: AlgorithmParams) -> Result<()> {
        let params = match params {
            AlgorithmParams::BeeColony(params) => params,
            other => {
                return Err(EvoError::ParamsMismatch {
                    expected: "bee-colony",
                    actual: other.kind(),
                })
            }
        };
        params.validate()?;

        let reinitialize = !self.population.is_empty()
            && params.common.population_size != self.params.common.population_size;
        self.params = params;
        if reinitialize {
            debug!("food-source count changed, re-initializing");
            self.initialize_population()?;
        }
        Ok(())
    }

    fn has_converged(&self) -> bool {
        self.stats.current_generation >= self.params.common.max_generations
            || (!self.population.is_empty()
                && population::diversity(&self.population) < self.params.diversity_threshold)
    }

    fn max_generations(&self) -> usize {
        self.params.common.max_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::benchmarks::ProblemId;

    fn engine(seed: u64) -> BeeColony {
        let mut params = BeeColonyParams::default();
        params.common.population_size = 20;
        params.common.max_generations = 30;
        params.common.seed = Some(seed);
        params.limit = 5;
        BeeColony::new(Problem::benchmark(ProblemId::Sphere, 3), params).unwrap()
    }

    #[test]
    fn test_food_source_count_is_fixed() {
        let mut abc = engine(1);
        abc.initialize_population().unwrap();
        for _ in 0..5 {
            abc.step().unwrap();
            assert_eq!(abc.population().len(), 20);
        }
    }

    #[test]
    fn test_best_is_monotone_in_raw_direction() {
        // Minimization problem: the best raw value must never increase.
        let mut abc = engine(2);
        abc.initialize_population().unwrap();
        let mut previous = f64::INFINITY;
        for _ in 0..30 {
            abc.step().unwrap();
            let best = abc.best().unwrap().fitness;
            assert!(best <= previous);
            previous = best;
        }
    }

    #[test]
    fn test_onlooker_weights_positive_when_all_equal() {
        let mut abc = engine(3);
        abc.initialize_population().unwrap();
        // Force identical quality everywhere.
        for ind in &mut abc.population {
            ind.fitness = 4.0;
        }
        let weights = abc.onlooker_weights();
        assert!(weights.iter().all(|&w| w > 0.0));
        let first = weights[0];
        assert!(weights.iter().all(|&w| (w - first).abs() < 1e-12));
    }

    #[test]
    fn test_onlooker_weights_favor_better_sources() {
        let mut abc = engine(4);
        abc.initialize_population().unwrap();
        abc.population[0].fitness = 0.1;
        abc.population[1].fitness = 50.0;
        let weights = abc.onlooker_weights();
        // Minimization: the lower raw value gets the larger weight.
        assert!(weights[0] > weights[1]);
    }

    #[test]
    fn test_scout_resets_exhausted_sources() {
        let mut abc = engine(5);
        abc.initialize_population().unwrap();
        abc.run().unwrap();
        // Trial counters never linger above the limit after a step: the
        // scout phase resets them at the end of each generation.
        for &t in &abc.trials {
            assert!(t <= abc.params().limit as u32 + 1);
        }
    }

    #[test]
    fn test_sources_stay_in_bounds() {
        let mut abc = engine(6);
        abc.initialize_population().unwrap();
        for _ in 0..10 {
            abc.step().unwrap();
            for source in abc.population() {
                assert!(abc.problem().is_in_bounds(&source.genotype));
            }
        }
    }

    #[test]
    fn test_converges_at_generation_budget() {
        let mut abc = engine(7);
        abc.run().unwrap();
        assert!(abc.has_converged());
        assert!(abc.stats().current_generation <= 30);
    }
}
