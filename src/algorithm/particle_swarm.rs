//! # Particle Swarm Optimization
//!
//! Velocity-driven swarm search: every particle keeps a position, a
//! velocity and a personal best, and is pulled toward its personal best
//! and the best of its informant set. The informant set is shaped by the
//! configured topology (global swarm, wrapping ring, or a wrapping
//! von Neumann grid). Velocities are clamped to a fraction of the average
//! bound range and positions are repaired after every move. The swarm
//! converges at the iteration budget or when diversity collapses.
//!
//! The swarm-wide best is tracked by index whenever a personal best
//! improves, so ties in fitness never make it ambiguous.

use tracing::{debug, trace};

use crate::error::{EvoError, Result};
use crate::population::{self, Individual};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::stats::AlgorithmStats;

use super::params::{AlgorithmParams, ParticleSwarmParams, Topology};
use super::Algorithm;

/// Particle swarm engine.
///
/// Fitness is kept in the internal maximize convention. `population()`
/// exposes the particles' current positions; personal bests are internal
/// state.
#[derive(Debug)]
pub struct ParticleSwarm {
    problem: Problem,
    params: ParticleSwarmParams,
    rng: RandomNumberGenerator,
    population: Vec<Individual>,
    velocities: Vec<Vec<f64>>,
    personal_best: Vec<Individual>,
    global_best_idx: usize,
    best: Option<Individual>,
    stats: AlgorithmStats,
}

fn make_rng(seed: Option<u64>) -> RandomNumberGenerator {
    match seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    }
}

impl ParticleSwarm {
    /// Creates an engine for `problem` with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid parameters.
    pub fn new(problem: Problem, params: ParticleSwarmParams) -> Result<Self> {
        params.validate()?;
        let rng = make_rng(params.common.seed);
        Ok(Self {
            problem,
            params,
            rng,
            population: Vec::new(),
            velocities: Vec::new(),
            personal_best: Vec::new(),
            global_best_idx: 0,
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
            AlgorithmParams::ParticleSwarm(params) => Self::new(problem, params),
            other => Err(EvoError::ParamsMismatch {
                expected: "particle-swarm",
                actual: other.kind(),
            }),
        }
    }

    /// The current parameters.
    pub fn params(&self) -> &ParticleSwarmParams {
        &self.params
    }

    /// Velocity clamp: the configured fraction of the average bound range.
    fn velocity_limit(&self) -> f64 {
        let bounds = self.problem.bounds();
        let avg_range =
            bounds.iter().map(|b| b.range()).sum::<f64>() / bounds.len() as f64;
        avg_range * self.params.max_velocity
    }

    /// The informant whose personal best the particle is pulled toward.
    fn neighborhood_best(&self, i: usize) -> usize {
        let n = self.personal_best.len();
        let best_of = |candidates: &mut dyn Iterator<Item = usize>| -> usize {
            candidates
                .max_by(|&a, &b| {
                    self.personal_best[a]
                        .fitness
                        .partial_cmp(&self.personal_best[b].fitness)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(i)
        };

        match self.params.topology {
            Topology::Global => self.global_best_idx,
            Topology::Ring { neighbors } => {
                let mut candidates = (1..=neighbors.min(n - 1))
                    .flat_map(|offset| [(i + offset) % n, (i + n - offset % n) % n]);
                best_of(&mut candidates)
            }
            Topology::VonNeumann => {
                // Approximate square grid of side ceil(sqrt(N)), wrapping
                // in both directions; out-of-range cells fold back into
                // the swarm.
                let side = (n as f64).sqrt().ceil() as usize;
                let rows = n.div_ceil(side);
                let row = i / side;
                let col = i % side;
                let mut candidates = [
                    ((row + rows - 1) % rows) * side + col,
                    ((row + 1) % rows) * side + col,
                    row * side + (col + side - 1) % side,
                    row * side + (col + 1) % side,
                ]
                .into_iter()
                .map(|idx| idx % n);
                best_of(&mut candidates)
            }
        }
    }

    fn update_global_best(&mut self) {
        if let Some(idx) = population::best_index(&self.personal_best) {
            self.global_best_idx = idx;
            let candidate = &self.personal_best[idx];
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

impl Algorithm for ParticleSwarm {
    fn name(&self) -> &'static str {
        "Particle Swarm Optimization"
    }

    fn problem(&self) -> &Problem {
        &self.problem
    }

    fn initialize_population(&mut self) -> Result<()> {
        let size = self.params.common.population_size;
        let vmax = self.velocity_limit();

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
        self.velocities = (0..size)
            .map(|_| {
                (0..self.problem.dimension())
                    .map(|_| self.rng.uniform(-vmax, vmax))
                    .collect()
            })
            .collect();
        self.personal_best = self.population.clone();
        self.best = None;
        self.stats.reset();
        self.update_global_best();
        debug!(
            swarm_size = size,
            topology = ?self.params.topology,
            problem = self.problem.name(),
            "initialized particle swarm"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if self.population.is_empty() {
            self.initialize_population()?;
        }

        let vmax = self.velocity_limit();
        let dim = self.problem.dimension();

        for i in 0..self.population.len() {
            let informant = self.neighborhood_best(i);
            let nbest = self.personal_best[informant].genotype.clone();
            let pbest = self.personal_best[i].genotype.clone();

            for d in 0..dim {
                let r1 = self.rng.uniform(0.0, 1.0);
                let r2 = self.rng.uniform(0.0, 1.0);
                let x = self.population[i].genotype[d];
                let v = self.params.inertia * self.velocities[i][d]
                    + self.params.cognitive * r1 * (pbest[d] - x)
                    + self.params.social * r2 * (nbest[d] - x);
                let v = v.clamp(-vmax, vmax);
                self.velocities[i][d] = v;
                self.population[i].genotype[d] = x + v;
            }
            self.problem.repair(&mut self.population[i].genotype);
        }

        let genotypes: Vec<Vec<f64>> = self
            .population
            .iter()
            .map(|p| p.genotype.clone())
            .collect();
        let fitness = self
            .problem
            .fitness_batch(&genotypes, self.params.common.parallel_threshold)?;

        for (i, fitness) in fitness.into_iter().enumerate() {
            self.population[i].fitness = fitness;
            if fitness > self.personal_best[i].fitness {
                self.personal_best[i] = self.population[i].clone();
            }
        }

        self.update_global_best();
        self.record_stats();
        trace!(
            generation = self.stats.current_generation,
            best = self.stats.best_fitness,
            diversity = self.stats.diversity,
            "particle swarm step"
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
        self.velocities.clear();
        self.personal_best.clear();
        self.global_best_idx = 0;
        self.best = None;
        self.stats.reset();
        self.rng = make_rng(self.params.common.seed);
    }

    fn set_params(&mut self, params: AlgorithmParams) -> Result<()> {
        let params = match params {
            AlgorithmParams::ParticleSwarm(params) => params,
            other => {
                return Err(EvoError::ParamsMismatch {
                    expected: "particle-swarm",
                    actual: other.kind(),
                })
            }
        };
        params.validate()?;

        let reinitialize = !self.population.is_empty()
            && params.common.population_size != self.params.common.population_size;
        self.params = params;
        if reinitialize {
            debug!("swarm size changed, re-initializing");
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
