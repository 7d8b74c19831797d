//! # Algorithm Parameters
//!
//! Configuration structs for the six engines, the [`AlgorithmParams`]
//! tagged union consumed by [`crate::algorithm::Algorithm::set_params`],
//! and the purely descriptive [`ParamDescriptor`] metadata that UI and
//! configuration layers render without interpreting.
//!
//! Every struct validates itself; engines call `validate()` at
//! construction and on every parameter update. Defaults carry the values
//! the interactive driver starts from.
//!
//! ## Example
//!
//! ```rust
//! use evolab::algorithm::params::{AlgorithmParams, GeneticParams};
//!
//! let mut params = GeneticParams::default();
//! params.mutation_rate = 0.05;
//! assert!(params.validate().is_ok());
//!
//! params.mutation_rate = 1.5;
//! assert!(params.validate().is_err());
//! let _ = AlgorithmParams::Genetic(GeneticParams::default());
//! ```

use crate::error::{EvoError, Result};
use crate::selection::{
    RankSelection, RouletteWheelSelection, SelectionStrategy, TournamentSelection,
};

use super::AlgorithmId;

/// Parameters shared by every engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CommonParams {
    /// Number of individuals the engine maintains. For the evolution
    /// strategy this is the parent count μ; simulated annealing forces it
    /// to 1.
    pub population_size: usize,
    /// Generation budget; also the `run()` safety stop for engines whose
    /// convergence test is diversity-only.
    pub max_generations: usize,
    /// Seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Minimum batch size before fitness evaluation goes parallel.
    pub parallel_threshold: usize,
}

impl Default for CommonParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            seed: None,
            parallel_threshold: 1000,
        }
    }
}

impl CommonParams {
    fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(EvoError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(EvoError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parent-selection method used by the genetic algorithm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionMethod {
    /// Tournament selection with the given tournament size.
    Tournament {
        /// Number of participants per tournament.
        size: usize,
    },
    /// Fitness-proportionate selection with shifted-positive weights.
    RouletteWheel,
    /// Linear rank selection.
    Rank,
}

impl SelectionMethod {
    /// Builds the corresponding strategy object.
    pub fn build(&self) -> Result<Box<dyn SelectionStrategy>> {
        Ok(match self {
            SelectionMethod::Tournament { size } => Box::new(TournamentSelection::new(*size)?),
            SelectionMethod::RouletteWheel => Box::new(RouletteWheelSelection::new()),
            SelectionMethod::Rank => Box::new(RankSelection::new()),
        })
    }
}

impl Default for SelectionMethod {
    fn default() -> Self {
        SelectionMethod::Tournament { size: 3 }
    }
}

/// Genetic algorithm parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticParams {
    /// Shared parameters.
    pub common: CommonParams,
    /// Parent-selection method.
    pub selection: SelectionMethod,
    /// Probability that a selected pair is crossed over rather than
    /// copied.
    pub crossover_rate: f64,
    /// Per-gene Gaussian mutation probability.
    pub mutation_rate: f64,
}

impl Default for GeneticParams {
    fn default() -> Self {
        Self {
            common: CommonParams::default(),
            selection: SelectionMethod::default(),
            crossover_rate: 0.9,
            mutation_rate: 0.1,
        }
    }
}

impl GeneticParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for out-of-range rates, a degenerate
    /// population, or an invalid selection method.
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.common.population_size < 2 {
            return Err(EvoError::Configuration(
                "Genetic algorithm needs a population of at least 2".to_string(),
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(EvoError::Configuration(format!(
                    "{} must be between 0.0 and 1.0",
                    name
                )));
            }
        }
        self.selection.build().map(|_| ())
    }
}

/// Survivor-selection scheme of the evolution strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsScheme {
    /// (μ+λ): parents compete with offspring.
    Plus,
    /// (μ,λ): parents are discarded even when better, forcing
    /// exploration.
    Comma,
}

/// Evolution strategy parameters. The parent count μ is
/// `common.population_size`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionStrategyParams {
    /// Shared parameters; `population_size` is μ.
    pub common: CommonParams,
    /// Offspring count λ.
    pub lambda: usize,
    /// Survivor-selection scheme.
    pub scheme: EsScheme,
    /// Diversity below which the strategy is considered converged.
    pub diversity_threshold: f64,
}

impl Default for EvolutionStrategyParams {
    fn default() -> Self {
        Self {
            common: CommonParams {
                population_size: 15,
                ..CommonParams::default()
            },
            lambda: 100,
            scheme: EsScheme::Plus,
            diversity_threshold: 1e-6,
        }
    }
}

impl EvolutionStrategyParams {
    /// The parent count μ.
    pub fn mu(&self) -> usize {
        self.common.population_size
    }

    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when λ is zero, or when a comma
    /// scheme cannot fill μ survivors from λ offspring.
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.lambda == 0 {
            return Err(EvoError::Configuration(
                "Offspring count lambda cannot be zero".to_string(),
            ));
        }
        if self.scheme == EsScheme::Comma && self.lambda < self.mu() {
            return Err(EvoError::Configuration(format!(
                "Comma selection needs lambda ({}) >= mu ({})",
                self.lambda,
                self.mu()
            )));
        }
        if self.diversity_threshold < 0.0 {
            return Err(EvoError::Configuration(
                "Diversity threshold cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Differential evolution mutation strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeStrategy {
    /// rand/1: `v = xₐ + F·(xᵦ - xᵧ)`.
    #[default]
    Rand1,
    /// best/1: `v = x_best + F·(xₐ - xᵦ)`.
    Best1,
    /// rand/2: `v = xₐ + F·(xᵦ - xᵧ) + F·(xδ - xε)`.
    Rand2,
    /// best/2: `v = x_best + F·(xₐ - xᵦ) + F·(xᵧ - xδ)`.
    Best2,
}

impl DeStrategy {
    /// Distinct population members the strategy combines, excluding the
    /// target.
    pub fn donors(&self) -> usize {
        match self {
            DeStrategy::Rand1 => 3,
            DeStrategy::Best1 => 2,
            DeStrategy::Rand2 => 5,
            DeStrategy::Best2 => 4,
        }
    }
}

/// Differential evolution parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialEvolutionParams {
    /// Shared parameters.
    pub common: CommonParams,
    /// Scaling factor F applied to difference vectors.
    pub scaling_factor: f64,
    /// Crossover rate CR of the binomial crossover.
    pub crossover_rate: f64,
    /// Mutation strategy.
    pub strategy: DeStrategy,
    /// Diversity below which the search is considered converged.
    pub diversity_threshold: f64,
}

impl Default for DifferentialEvolutionParams {
    fn default() -> Self {
        Self {
            common: CommonParams::default(),
            scaling_factor: 0.8,
            crossover_rate: 0.9,
            strategy: DeStrategy::default(),
            diversity_threshold: 1e-6,
        }
    }
}

impl DifferentialEvolutionParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when F or CR is out of range, or the
    /// population is too small to supply the strategy's distinct donors.
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if !(0.0..=2.0).contains(&self.scaling_factor) || self.scaling_factor == 0.0 {
            return Err(EvoError::Configuration(
                "Scaling factor F must be in (0.0, 2.0]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvoError::Configuration(
                "Crossover rate CR must be between 0.0 and 1.0".to_string(),
            ));
        }
        let needed = self.strategy.donors() + 1;
        if self.common.population_size < needed {
            return Err(EvoError::Configuration(format!(
                "Strategy needs a population of at least {}, got {}",
                needed, self.common.population_size
            )));
        }
        if self.diversity_threshold < 0.0 {
            return Err(EvoError::Configuration(
                "Diversity threshold cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Informant topology of the particle swarm.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every particle informs every other.
    Global,
    /// `neighbors` particles on each side in a wrapping ring.
    Ring {
        /// Neighbors on each side.
        neighbors: usize,
    },
    /// 4-connected wrapping grid of side `ceil(√N)`.
    VonNeumann,
}

/// Particle swarm parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSwarmParams {
    /// Shared parameters.
    pub common: CommonParams,
    /// Inertia weight w.
    pub inertia: f64,
    /// Cognitive coefficient c1 (pull toward the personal best).
    pub cognitive: f64,
    /// Social coefficient c2 (pull toward the neighborhood best).
    pub social: f64,
    /// Informant topology.
    pub topology: Topology,
    /// Velocity clamp as a fraction of the average bound range.
    pub max_velocity: f64,
    /// Diversity below which the swarm is considered converged.
    pub diversity_threshold: f64,
}

impl Default for ParticleSwarmParams {
    fn default() -> Self {
        Self {
            common: CommonParams::default(),
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            topology: Topology::Global,
            max_velocity: 0.1,
            diversity_threshold: 1e-6,
        }
    }
}

impl ParticleSwarmParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for negative coefficients, an empty
    /// ring neighborhood, or a velocity clamp outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.common.population_size < 2 {
            return Err(EvoError::Configuration(
                "Particle swarm needs at least 2 particles".to_string(),
            ));
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if value < 0.0 {
                return Err(EvoError::Configuration(format!(
                    "{} coefficient cannot be negative",
                    name
                )));
            }
        }
        if let Topology::Ring { neighbors } = self.topology {
            if neighbors == 0 {
                return Err(EvoError::Configuration(
                    "Ring topology needs at least 1 neighbor per side".to_string(),
                ));
            }
        }
        if !(self.max_velocity > 0.0 && self.max_velocity <= 1.0) {
            return Err(EvoError::Configuration(
                "max_velocity must be in (0.0, 1.0]".to_string(),
            ));
        }
        if self.diversity_threshold < 0.0 {
            return Err(EvoError::Configuration(
                "Diversity threshold cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Artificial bee colony parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BeeColonyParams {
    /// Shared parameters; `population_size` is the food-source count.
    pub common: CommonParams,
    /// Trial-counter limit after which a food source is abandoned to a
    /// scout.
    pub limit: usize,
    /// Half-width of the uniform φ interval used by neighbor generation.
    pub scaling_factor: f64,
    /// Diversity below which the colony is considered converged.
    pub diversity_threshold: f64,
}

impl Default for BeeColonyParams {
    fn default() -> Self {
        Self {
            common: CommonParams::default(),
            limit: 20,
            scaling_factor: 1.0,
            diversity_threshold: 1e-4,
        }
    }
}

impl BeeColonyParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the colony cannot pick a
    /// distinct partner, the limit is zero, or the scaling factor is not
    /// positive.
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        if self.common.population_size < 2 {
            return Err(EvoError::Configuration(
                "Bee colony needs at least 2 food sources".to_string(),
            ));
        }
        if self.limit == 0 {
            return Err(EvoError::Configuration(
                "Abandonment limit cannot be zero".to_string(),
            ));
        }
        if self.scaling_factor <= 0.0 {
            return Err(EvoError::Configuration(
                "Scaling factor must be positive".to_string(),
            ));
        }
        if self.diversity_threshold < 0.0 {
            return Err(EvoError::Configuration(
                "Diversity threshold cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulated annealing parameters. The population size is always 1; the
/// common field is kept for interface uniformity and ignored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingParams {
    /// Shared parameters; `population_size` is forced to 1.
    pub common: CommonParams,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied every iteration.
    pub cooling_rate: f64,
    /// Temperature below which the search is considered converged.
    pub min_temperature: f64,
    /// Perturbation magnitude as a fraction of each dimension's bound
    /// range.
    pub neighborhood_size: f64,
}

impl Default for AnnealingParams {
    fn default() -> Self {
        Self {
            common: CommonParams {
                population_size: 1,
                max_generations: 1000,
                ..CommonParams::default()
            },
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            min_temperature: 1e-6,
            neighborhood_size: 0.1,
        }
    }
}

impl AnnealingParams {
    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a non-positive temperature, a
    /// cooling rate outside (0, 1), or a neighborhood outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.common.max_generations == 0 {
            return Err(EvoError::Configuration(
                "Number of iterations cannot be zero".to_string(),
            ));
        }
        if self.initial_temperature <= 0.0 {
            return Err(EvoError::Configuration(
                "Initial temperature must be positive".to_string(),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(EvoError::Configuration(
                "Cooling rate must be strictly between 0.0 and 1.0".to_string(),
            ));
        }
        if self.min_temperature < 0.0 {
            return Err(EvoError::Configuration(
                "Minimum temperature cannot be negative".to_string(),
            ));
        }
        if !(self.neighborhood_size > 0.0 && self.neighborhood_size <= 1.0) {
            return Err(EvoError::Configuration(
                "neighborhood_size must be in (0.0, 1.0]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Tagged union over the per-engine parameter structs.
///
/// This is the payload of [`crate::algorithm::Algorithm::set_params`]:
/// engines accept their own variant and reject the others.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmParams {
    /// Genetic algorithm.
    Genetic(GeneticParams),
    /// Evolution strategy.
    EvolutionStrategy(EvolutionStrategyParams),
    /// Differential evolution.
    DifferentialEvolution(DifferentialEvolutionParams),
    /// Particle swarm optimization.
    ParticleSwarm(ParticleSwarmParams),
    /// Artificial bee colony.
    BeeColony(BeeColonyParams),
    /// Simulated annealing.
    Annealing(AnnealingParams),
}

impl AlgorithmParams {
    /// The default parameter set for an engine, for configuration layers
    /// that render defaults without constructing the engine.
    pub fn default_for(id: AlgorithmId) -> Self {
        match id {
            AlgorithmId::Genetic => AlgorithmParams::Genetic(GeneticParams::default()),
            AlgorithmId::EvolutionStrategy => {
                AlgorithmParams::EvolutionStrategy(EvolutionStrategyParams::default())
            }
            AlgorithmId::DifferentialEvolution => {
                AlgorithmParams::DifferentialEvolution(DifferentialEvolutionParams::default())
            }
            AlgorithmId::ParticleSwarm => {
                AlgorithmParams::ParticleSwarm(ParticleSwarmParams::default())
            }
            AlgorithmId::BeeColony => AlgorithmParams::BeeColony(BeeColonyParams::default()),
            AlgorithmId::SimulatedAnnealing => {
                AlgorithmParams::Annealing(AnnealingParams::default())
            }
        }
    }

    /// The engine family this parameter set belongs to.
    pub fn kind(&self) -> &'static str {
        match self {
            AlgorithmParams::Genetic(_) => "genetic",
            AlgorithmParams::EvolutionStrategy(_) => "evolution-strategy",
            AlgorithmParams::DifferentialEvolution(_) => "differential-evolution",
            AlgorithmParams::ParticleSwarm(_) => "particle-swarm",
            AlgorithmParams::BeeColony(_) => "bee-colony",
            AlgorithmParams::Annealing(_) => "simulated-annealing",
        }
    }

    /// Validates the contained parameter set.
    pub fn validate(&self) -> Result<()> {
        match self {
            AlgorithmParams::Genetic(p) => p.validate(),
            AlgorithmParams::EvolutionStrategy(p) => p.validate(),
            AlgorithmParams::DifferentialEvolution(p) => p.validate(),
            AlgorithmParams::ParticleSwarm(p) => p.validate(),
            AlgorithmParams::BeeColony(p) => p.validate(),
            AlgorithmParams::Annealing(p) => p.validate(),
        }
    }
}

/// The value type of a described parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Whole numbers (population sizes, counters).
    Integer,
    /// Real numbers (rates, coefficients).
    Float,
    /// One of a fixed list of options.
    Choice,
}

/// Purely descriptive metadata for one tunable parameter.
///
/// Consumed by UI/config layers to render controls; the engine itself
/// never reads it. Serialize-only under the `serde` feature: the
/// descriptor tables are static program data, never parsed back.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDescriptor {
    /// Field name as it appears in the parameter struct.
    pub name: &'static str,
    /// Value type.
    pub kind: ParamKind,
    /// Lower end of the sensible range.
    pub min: f64,
    /// Upper end of the sensible range.
    pub max: f64,
    /// Default value (for choices: the default option index).
    pub default: f64,
    /// Option labels for `ParamKind::Choice`, empty otherwise.
    pub options: &'static [&'static str],
}

impl ParamDescriptor {
    const fn number(kind: ParamKind, name: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            name,
            kind,
            min,
            max,
            default,
            options: &[],
        }
    }

    const fn choice(name: &'static str, options: &'static [&'static str], default: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Choice,
            min: 0.0,
            max: 0.0,
            default,
            options,
        }
    }
}

/// The descriptors of every tunable parameter of an engine, in
/// presentation order.
pub fn descriptors(id: AlgorithmId) -> Vec<ParamDescriptor> {
    let common = [
        ParamDescriptor::number(ParamKind::Integer, "population_size", 1.0, 500.0, 50.0),
        ParamDescriptor::number(ParamKind::Integer, "max_generations", 1.0, 10000.0, 100.0),
    ];
    let mut out: Vec<ParamDescriptor> = common.to_vec();
    match id {
        AlgorithmId::Genetic => {
            out.push(ParamDescriptor::choice(
                "selection",
                &["tournament", "roulette-wheel", "rank"],
                0.0,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "crossover_rate",
                0.0,
                1.0,
                0.9,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "mutation_rate",
                0.0,
                1.0,
                0.1,
            ));
        }
        AlgorithmId::EvolutionStrategy => {
            out.push(ParamDescriptor::number(
                ParamKind::Integer,
                "lambda",
                1.0,
                1000.0,
                100.0,
            ));
            out.push(ParamDescriptor::choice("scheme", &["plus", "comma"], 0.0));
        }
        AlgorithmId::DifferentialEvolution => {
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "scaling_factor",
                0.0,
                2.0,
                0.8,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "crossover_rate",
                0.0,
                1.0,
                0.9,
            ));
            out.push(ParamDescriptor::choice(
                "strategy",
                &["rand/1", "best/1", "rand/2", "best/2"],
                0.0,
            ));
        }
        AlgorithmId::ParticleSwarm => {
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "inertia",
                0.0,
                1.0,
                0.7,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "cognitive",
                0.0,
                4.0,
                1.5,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "social",
                0.0,
                4.0,
                1.5,
            ));
            out.push(ParamDescriptor::choice(
                "topology",
                &["global", "ring", "von-neumann"],
                0.0,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "max_velocity",
                0.01,
                1.0,
                0.1,
            ));
        }
        AlgorithmId::BeeColony => {
            out.push(ParamDescriptor::number(
                ParamKind::Integer,
                "limit",
                1.0,
                200.0,
                20.0,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "scaling_factor",
                0.1,
                2.0,
                1.0,
            ));
        }
        AlgorithmId::SimulatedAnnealing => {
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "initial_temperature",
                0.01,
                10000.0,
                100.0,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "cooling_rate",
                0.5,
                0.999,
                0.95,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "min_temperature",
                0.0,
                1.0,
                1e-6,
            ));
            out.push(ParamDescriptor::number(
                ParamKind::Float,
                "neighborhood_size",
                0.01,
                1.0,
                0.1,
            ));
        }
    }
    out
}
