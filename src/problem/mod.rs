//! # Problem Abstraction
//!
//! A [`Problem`] defines an objective function over a bounded real vector
//! space. It generates random solutions, repairs out-of-bounds vectors and
//! performs dimension-checked evaluation. Algorithms only ever talk to a
//! `Problem`; the concrete benchmark functions live in [`benchmarks`].
//!
//! ## Example
//!
//! ```rust
//! use evolab::problem::{benchmarks::ProblemId, Problem};
//! use evolab::rng::RandomNumberGenerator;
//!
//! let problem = Problem::benchmark(ProblemId::Sphere, 2);
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let solution = problem.generate_random_solution(&mut rng);
//! assert!(problem.is_in_bounds(&solution));
//! assert!(problem.evaluate(&solution).is_ok());
//! ```

pub mod benchmarks;

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{EvoError, Result};
use crate::rng::RandomNumberGenerator;

/// Inclusive bounds for a single dimension of the search space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Creates new bounds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min > max` or either bound is
    /// non-finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(EvoError::Configuration(
                "Bounds must be finite".to_string(),
            ));
        }
        if min > max {
            return Err(EvoError::Configuration(format!(
                "Invalid bounds: min ({}) must be <= max ({})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates symmetric bounds `[-half_width, half_width]`.
    pub fn symmetric(half_width: f64) -> Self {
        Self {
            min: -half_width.abs(),
            max: half_width.abs(),
        }
    }

    /// The width of the interval.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Whether the raw objective value is to be minimized or maximized.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower raw objective values are better. All bundled benchmarks use
    /// this direction.
    Minimize,
    /// Higher raw objective values are better.
    Maximize,
}

/// A pure, stateless objective function over real vectors.
///
/// Implementations must be a pure map `R^n -> R`: no interior mutability,
/// no dependence on evaluation order. Dimension checking is the enclosing
/// [`Problem`]'s job, so `evaluate` may assume a well-formed input.
pub trait ObjectiveFunction: Send + Sync {
    /// Short human-readable name of the function.
    fn name(&self) -> &'static str;

    /// Evaluates the raw objective value for `x`.
    fn evaluate(&self, x: &[f64]) -> f64;

    /// The canonical `[min, max]` interval applied to every dimension.
    fn default_bounds(&self) -> (f64, f64);

    /// The raw objective value at the global optimum.
    fn optimum_value(&self) -> f64 {
        0.0
    }

    /// The global optimum location, when a single point is known.
    fn optimum(&self, dimension: usize) -> Option<Vec<f64>> {
        Some(vec![0.0; dimension])
    }
}

/// An immutable optimization problem: an objective function plus the
/// bounded vector space it is searched over.
///
/// Constructed once per problem selection and stateless across
/// evaluations. Cloning is cheap (the objective is shared).
#[derive(Clone)]
pub struct Problem {
    objective: Arc<dyn ObjectiveFunction>,
    dimension: usize,
    bounds: Vec<Bounds>,
    direction: Direction,
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("objective", &self.objective.name())
            .field("dimension", &self.dimension)
            .field("bounds", &self.bounds)
            .field("direction", &self.direction)
            .finish()
    }
}

impl Problem {
    /// Creates a problem over `dimension` dimensions using the objective's
    /// canonical bounds on every dimension.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `dimension` is zero.
    pub fn new(
        objective: Arc<dyn ObjectiveFunction>,
        dimension: usize,
        direction: Direction,
    ) -> Result<Self> {
        let (min, max) = objective.default_bounds();
        let bounds = vec![Bounds::new(min, max)?; dimension];
        Self::with_bounds(objective, bounds, direction)
    }

    /// Creates a problem with explicit per-dimension bounds. The dimension
    /// is the number of bounds supplied.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `bounds` is empty.
    pub fn with_bounds(
        objective: Arc<dyn ObjectiveFunction>,
        bounds: Vec<Bounds>,
        direction: Direction,
    ) -> Result<Self> {
        if bounds.is_empty() {
            return Err(EvoError::Configuration(
                "Problem dimension cannot be zero".to_string(),
            ));
        }
        Ok(Self {
            objective,
            dimension: bounds.len(),
            bounds,
            direction,
        })
    }

    /// Builds one of the bundled benchmark problems at the given dimension.
    ///
    /// # Panics
    ///
    /// Never panics: every benchmark id carries valid canonical bounds and
    /// the dimension is clamped to at least 1.
    pub fn benchmark(id: benchmarks::ProblemId, dimension: usize) -> Self {
        let objective = id.objective();
        let (min, max) = objective.default_bounds();
        let dimension = dimension.max(1);
        Self {
            objective,
            dimension,
            bounds: vec![Bounds { min, max }; dimension],
            direction: Direction::Minimize,
        }
    }

    /// The objective's name.
    pub fn name(&self) -> &'static str {
        self.objective.name()
    }

    /// The number of dimensions of the search space.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The per-dimension bounds.
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    /// The optimization direction of the raw objective.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the raw objective is minimized.
    pub fn is_minimization(&self) -> bool {
        self.direction == Direction::Minimize
    }

    /// The known global optimum location, if any.
    pub fn optimum(&self) -> Option<Vec<f64>> {
        self.objective.optimum(self.dimension)
    }

    /// The raw objective value at the global optimum.
    pub fn optimum_value(&self) -> f64 {
        self.objective.optimum_value()
    }

    /// Evaluates the raw objective value of `genotype`.
    ///
    /// # Errors
    ///
    /// Fails fast with [`EvoError::DimensionMismatch`] if the genotype
    /// length does not match the problem dimension; this indicates a bug
    /// in operator construction and is propagated, never recovered.
    pub fn evaluate(&self, genotype: &[f64]) -> Result<f64> {
        if genotype.len() != self.dimension {
            return Err(EvoError::DimensionMismatch {
                expected: self.dimension,
                actual: genotype.len(),
            });
        }
        Ok(self.objective.evaluate(genotype))
    }

    /// Evaluates `genotype` in the internal maximize convention: the raw
    /// value is negated for minimization problems so that higher fitness is
    /// always better.
    pub fn fitness(&self, genotype: &[f64]) -> Result<f64> {
        let raw = self.evaluate(genotype)?;
        Ok(match self.direction {
            Direction::Minimize => -raw,
            Direction::Maximize => raw,
        })
    }

    /// Translates a maximize-convention fitness back to the raw objective
    /// value.
    pub fn raw_from_fitness(&self, fitness: f64) -> f64 {
        match self.direction {
            Direction::Minimize => -fitness,
            Direction::Maximize => fitness,
        }
    }

    /// Compares two raw objective values in the problem's direction.
    ///
    /// Used by the engines that keep raw values and switch on direction
    /// instead of negating (artificial bee colony, simulated annealing).
    pub fn is_improvement(&self, candidate: f64, incumbent: f64) -> bool {
        match self.direction {
            Direction::Minimize => candidate < incumbent,
            Direction::Maximize => candidate > incumbent,
        }
    }

    /// Evaluates a batch of genotypes in the maximize convention,
    /// in parallel once the batch reaches `parallel_threshold`.
    ///
    /// # Errors
    ///
    /// Propagates dimension mismatches and rejects non-finite objective
    /// values with [`EvoError::FitnessCalculation`].
    pub fn fitness_batch(
        &self,
        genotypes: &[Vec<f64>],
        parallel_threshold: usize,
    ) -> Result<Vec<f64>> {
        let check = |value: Result<f64>| -> Result<f64> {
            let value = value?;
            if !value.is_finite() {
                return Err(EvoError::FitnessCalculation(format!(
                    "Non-finite fitness value encountered: {}",
                    value
                )));
            }
            Ok(value)
        };

        if genotypes.len() >= parallel_threshold.max(1) {
            genotypes
                .par_iter()
                .map(|genotype| check(self.fitness(genotype)))
                .collect()
        } else {
            genotypes
                .iter()
                .map(|genotype| check(self.fitness(genotype)))
                .collect()
        }
    }

    /// Returns a vector with each component uniformly sampled from its
    /// dimension's bounds.
    pub fn generate_random_solution(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        self.bounds
            .iter()
            .map(|b| rng.uniform(b.min, b.max))
            .collect()
    }

    /// Clamps each component of `genotype` into its dimension's bounds.
    ///
    /// Deterministic and idempotent: repairing an already-feasible vector
    /// leaves it unchanged. Components beyond the problem dimension are
    /// left untouched.
    pub fn repair(&self, genotype: &mut [f64]) {
        for (value, bound) in genotype.iter_mut().zip(self.bounds.iter()) {
            *value = bound.clamp(*value);
        }
    }

    /// Whether every component of `genotype` lies inside its bounds.
    ///
    /// Mirrors the check performed by [`Problem::repair`]; a repaired
    /// vector always satisfies it.
    pub fn is_in_bounds(&self, genotype: &[f64]) -> bool {
        genotype.len() == self.dimension
            && genotype
                .iter()
                .zip(self.bounds.iter())
                .all(|(value, bound)| bound.contains(*value))
    }
}

#[cfg(test)]
mod tests {
    use super::benchmarks::ProblemId;
    use super::*;

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(-1.0, 1.0).is_ok());
        assert!(Bounds::new(1.0, -1.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_bounds_clamp_and_contains() {
        let b = Bounds::symmetric(5.0);
        assert!(b.contains(5.0));
        assert!(!b.contains(5.1));
        assert_eq!(b.clamp(-7.0), -5.0);
        assert_eq!(b.clamp(0.5), 0.5);
    }

    #[test]
    fn test_evaluate_dimension_mismatch() {
        let problem = Problem::benchmark(ProblemId::Sphere, 3);
        let result = problem.evaluate(&[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(EvoError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_fitness_negates_minimization() {
        let problem = Problem::benchmark(ProblemId::Sphere, 2);
        assert_eq!(problem.evaluate(&[1.0, 1.0]).unwrap(), 2.0);
        assert_eq!(problem.fitness(&[1.0, 1.0]).unwrap(), -2.0);
        assert_eq!(problem.raw_from_fitness(-2.0), 2.0);
    }

    #[test]
    fn test_repair_is_idempotent() {
        let problem = Problem::benchmark(ProblemId::Sphere, 3);
        let mut v = vec![-100.0, 0.25, 100.0];
        problem.repair(&mut v);
        let once = v.clone();
        problem.repair(&mut v);
        assert_eq!(v, once);
        assert!(problem.is_in_bounds(&v));
    }

    #[test]
    fn test_random_solution_feasible() {
        let problem = Problem::benchmark(ProblemId::Ackley, 4);
        let mut rng = RandomNumberGenerator::from_seed(11);
        for _ in 0..50 {
            let solution = problem.generate_random_solution(&mut rng);
            assert_eq!(solution.len(), 4);
            assert!(problem.is_in_bounds(&solution));
            let mut repaired = solution.clone();
            problem.repair(&mut repaired);
            assert_eq!(repaired, solution);
        }
    }

    #[test]
    fn test_is_improvement_direction_switch() {
        let minimize = Problem::benchmark(ProblemId::Sphere, 2);
        assert!(minimize.is_improvement(1.0, 2.0));
        assert!(!minimize.is_improvement(2.0, 1.0));

        let maximize = Problem::new(
            ProblemId::Sphere.objective(),
            2,
            Direction::Maximize,
        )
        .unwrap();
        assert!(maximize.is_improvement(2.0, 1.0));
    }

    #[test]
    fn test_fitness_batch_matches_single() {
        let problem = Problem::benchmark(ProblemId::Sphere, 2);
        let genotypes = vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 0.0]];
        let batch = problem.fitness_batch(&genotypes, 1000).unwrap();
        assert_eq!(batch, vec![0.0, -2.0, -4.0]);

        // Forcing the parallel path yields the same values.
        let parallel = problem.fitness_batch(&genotypes, 1).unwrap();
        assert_eq!(parallel, batch);
    }
}
