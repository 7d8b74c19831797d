//! # Algorithm Abstraction
//!
//! The [`Algorithm`] trait is the uniform lifecycle contract every engine
//! implements: initialize a population, step one generation at a time (or
//! run to convergence), and expose population/best/stats snapshots in
//! between. The six engines share this contract and nothing else: there
//! is no common base implementation, because they have no meaningful
//! shared behavior beyond the interface.
//!
//! An engine instance moves through the states
//! `Uninitialized -> Initialized -> Stepping -> Converged`; `reset()`
//! returns it to uninitialized-but-configured, and `step()` on an
//! uninitialized engine initializes implicitly. Convergence does not lock
//! the engine: callers are expected to check [`Algorithm::has_converged`]
//! between steps, but stepping past it stays legal.
//!
//! Engines are selected by string id through [`AlgorithmId`]; the mapping
//! is static and unknown ids resolve to `None`.
//!
//! ## Example
//!
//! ```rust
//! use evolab::algorithm::{create_by_id, Algorithm};
//! use evolab::problem::{benchmarks::ProblemId, Problem};
//!
//! let problem = Problem::benchmark(ProblemId::Sphere, 2);
//! let mut engine = create_by_id("genetic", problem).unwrap().unwrap();
//!
//! engine.initialize_population().unwrap();
//! engine.step().unwrap();
//! assert_eq!(engine.stats().current_generation, 1);
//! assert!(engine.best().is_some());
//!
//! assert!(create_by_id("tabu-search",
//!     evolab::problem::Problem::benchmark(ProblemId::Sphere, 2)).is_none());
//! ```

pub mod annealing;
pub mod bee_colony;
pub mod differential_evolution;
pub mod evolution_strategy;
pub mod genetic;
pub mod params;
pub mod particle_swarm;

pub use annealing::SimulatedAnnealing;
pub use bee_colony::BeeColony;
pub use differential_evolution::DifferentialEvolution;
pub use evolution_strategy::EvolutionStrategy;
pub use genetic::GeneticAlgorithm;
pub use particle_swarm::ParticleSwarm;

use std::fmt::Debug;

use crate::error::Result;
use crate::population::Individual;
use crate::problem::Problem;
use crate::stats::AlgorithmStats;

use params::AlgorithmParams;

/// The uniform lifecycle contract of every engine.
///
/// All methods are synchronous and never block; pacing is the caller's
/// concern. Each instance exclusively owns its population and statistics;
/// a single external caller drives one instance at a time.
pub trait Algorithm: Debug + Send {
    /// The engine's display name.
    fn name(&self) -> &'static str;

    /// The problem the engine optimizes.
    fn problem(&self) -> &Problem;

    /// Creates (or recreates) the population from fresh random solutions
    /// and clears the statistics. Implicitly invoked by the first
    /// `step()`.
    fn initialize_population(&mut self) -> Result<()>;

    /// Advances the search by one generation and appends one statistics
    /// record.
    fn step(&mut self) -> Result<()>;

    /// Current population snapshot. Callers must treat the returned
    /// individuals as read-only; mutations go through engine methods.
    fn population(&self) -> &[Individual];

    /// Best individual found so far. Monotone: it never regresses even
    /// when the current population does (comma selection, annealing
    /// acceptance). `None` before initialization.
    fn best(&self) -> Option<&Individual>;

    /// The best individual's raw objective value (the internal fitness
    /// convention translated back to the problem's direction).
    fn best_raw(&self) -> Option<f64>;

    /// Statistics snapshot plus full history.
    fn stats(&self) -> &AlgorithmStats;

    /// Returns to the uninitialized-but-configured state: population,
    /// best, statistics and engine state are cleared and a seeded random
    /// stream is restored.
    fn reset(&mut self);

    /// Replaces the parameter set.
    ///
    /// Population-altering parameters (population size, μ) force a full
    /// population re-initialization; everything else applies from the
    /// next step.
    ///
    /// # Errors
    ///
    /// Rejects parameter sets of a different engine family and invalid
    /// values.
    fn set_params(&mut self, params: AlgorithmParams) -> Result<()>;

    /// Whether the engine's convergence criterion currently holds.
    fn has_converged(&self) -> bool;

    /// The configured generation budget.
    fn max_generations(&self) -> usize;

    /// Steps until [`Algorithm::has_converged`] holds, initializing first
    /// if necessary. Always terminates: the generation budget bounds the
    /// loop even for engines whose criterion is diversity-only.
    fn run(&mut self) -> Result<()> {
        if self.population().is_empty() {
            self.initialize_population()?;
        }
        while !self.has_converged() && self.stats().current_generation < self.max_generations() {
            self.step()?;
        }
        Ok(())
    }
}

/// Static identifiers for the bundled engines.
///
/// Replaces runtime registration: the id set is fixed at compile time and
/// unknown ids resolve to `None`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// [`GeneticAlgorithm`]
    Genetic,
    /// [`EvolutionStrategy`]
    EvolutionStrategy,
    /// [`DifferentialEvolution`]
    DifferentialEvolution,
    /// [`ParticleSwarm`]
    ParticleSwarm,
    /// [`BeeColony`]
    BeeColony,
    /// [`SimulatedAnnealing`]
    SimulatedAnnealing,
}

impl AlgorithmId {
    /// Every bundled engine, in presentation order.
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::Genetic,
        AlgorithmId::EvolutionStrategy,
        AlgorithmId::DifferentialEvolution,
        AlgorithmId::ParticleSwarm,
        AlgorithmId::BeeColony,
        AlgorithmId::SimulatedAnnealing,
    ];

    /// The stable string id used by configuration layers.
    pub fn as_id(&self) -> &'static str {
        match self {
            AlgorithmId::Genetic => "genetic",
            AlgorithmId::EvolutionStrategy => "evolution-strategy",
            AlgorithmId::DifferentialEvolution => "differential-evolution",
            AlgorithmId::ParticleSwarm => "particle-swarm",
            AlgorithmId::BeeColony => "bee-colony",
            AlgorithmId::SimulatedAnnealing => "simulated-annealing",
        }
    }

    /// Resolves a string id. Unknown ids yield `None`; the caller decides
    /// how to surface that.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_id() == id)
    }
}

/// Builds an engine for `problem` with the given parameters, or the
/// engine's defaults when `params` is `None`.
///
/// # Errors
///
/// Returns a parameter-mismatch error when `params` belongs to a
/// different engine family, and configuration errors for invalid values.
pub fn create(
    id: AlgorithmId,
    problem: Problem,
    params: Option<AlgorithmParams>,
) -> Result<Box<dyn Algorithm>> {
    let params = params.unwrap_or_else(|| AlgorithmParams::default_for(id));
    Ok(match id {
        AlgorithmId::Genetic => Box::new(GeneticAlgorithm::from_params(problem, params)?),
        AlgorithmId::EvolutionStrategy => {
            Box::new(EvolutionStrategy::from_params(problem, params)?)
        }
        AlgorithmId::DifferentialEvolution => {
            Box::new(DifferentialEvolution::from_params(problem, params)?)
        }
        AlgorithmId::ParticleSwarm => Box::new(ParticleSwarm::from_params(problem, params)?),
        AlgorithmId::BeeColony => Box::new(BeeColony::from_params(problem, params)?),
        AlgorithmId::SimulatedAnnealing => {
            Box::new(SimulatedAnnealing::from_params(problem, params)?)
        }
    })
}

/// Builds an engine from a string id with default parameters.
///
/// Returns `None` for unknown ids (the "return empty, don't throw"
/// factory convention); construction itself cannot fail with defaults,
/// so the inner `Result` is `Ok` in practice.
pub fn create_by_id(id: &str, problem: Problem) -> Option<Result<Box<dyn Algorithm>>> {
    AlgorithmId::from_id(id).map(|id| create(id, problem, None))
}
