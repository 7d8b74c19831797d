//! # Benchmark Function Library
//!
//! Standard continuous benchmark functions for exercising and comparing
//! the algorithm engines. Each function is a pure, stateless map
//! `R^n -> R`, minimized by convention, with canonical bounds applied
//! uniformly to every dimension.
//!
//! Problems are selected by string id through [`ProblemId`]; the mapping
//! is static and unknown ids resolve to `None` rather than failing.
//!
//! ## Example
//!
//! ```rust
//! use evolab::problem::benchmarks::ProblemId;
//! use evolab::problem::Problem;
//!
//! let id = ProblemId::from_id("rastrigin").unwrap();
//! let problem = Problem::benchmark(id, 10);
//! assert_eq!(problem.name(), "Rastrigin");
//! assert!(ProblemId::from_id("travelling-salesman").is_none());
//! ```

use std::f64::consts::{E, PI};
use std::sync::Arc;

use super::ObjectiveFunction;

/// Sphere function: `f(x) = Σxᵢ²`.
///
/// Unimodal, convex, separable. Optimum 0 at the origin.
#[derive(Clone, Debug, Default)]
pub struct Sphere;

impl ObjectiveFunction for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }
}

/// Rastrigin function: `f(x) = 10n + Σ(xᵢ² - 10cos(2πxᵢ))`.
///
/// Highly multimodal with a regular grid of local minima. Optimum 0 at
/// the origin.
#[derive(Clone, Debug, Default)]
pub struct Rastrigin;

impl ObjectiveFunction for Rastrigin {
    fn name(&self) -> &'static str {
        "Rastrigin"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        let n = x.len() as f64;
        10.0 * n
            + x.iter()
                .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }
}

/// Rosenbrock function: `f(x) = Σ[100(xᵢ₊₁ - xᵢ²)² + (xᵢ - 1)²]`.
///
/// A narrow curved valley; easy to reach, hard to traverse. Optimum 0 at
/// `(1, 1, ..., 1)`.
#[derive(Clone, Debug, Default)]
pub struct Rosenbrock;

impl ObjectiveFunction for Rosenbrock {
    fn name(&self) -> &'static str {
        "Rosenbrock"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        x.windows(2)
            .map(|w| {
                let xi = w[0];
                let xi1 = w[1];
                100.0 * (xi1 - xi * xi).powi(2) + (xi - 1.0).powi(2)
            })
            .sum()
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-2.048, 2.048)
    }

    fn optimum(&self, dimension: usize) -> Option<Vec<f64>> {
        Some(vec![1.0; dimension])
    }
}

/// Ackley function:
/// `f(x) = -20·exp(-0.2·√(Σxᵢ²/n)) - exp(Σcos(2πxᵢ)/n) + 20 + e`.
///
/// Nearly flat outer region with a deep central funnel. Optimum 0 at the
/// origin.
#[derive(Clone, Debug, Default)]
pub struct Ackley;

impl ObjectiveFunction for Ackley {
    fn name(&self) -> &'static str {
        "Ackley"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        let n = x.len() as f64;
        let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
        let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();
        -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-32.768, 32.768)
    }
}

/// Schwefel problem 2.22: `f(x) = Σ|xᵢ| + Π|xᵢ|`.
///
/// Unimodal, non-separable through the product term. Optimum 0 at the
/// origin.
#[derive(Clone, Debug, Default)]
pub struct Schwefel222;

impl ObjectiveFunction for Schwefel222 {
    fn name(&self) -> &'static str {
        "Schwefel 2.22"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        let sum: f64 = x.iter().map(|xi| xi.abs()).sum();
        let product: f64 = x.iter().map(|xi| xi.abs()).product();
        sum + product
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-10.0, 10.0)
    }
}

/// Schwefel problem 1.2 (double sum): `f(x) = Σᵢ(Σⱼ≤ᵢ xⱼ)²`.
///
/// Unimodal with strongly coupled dimensions. Optimum 0 at the origin.
#[derive(Clone, Debug, Default)]
pub struct Schwefel12;

impl ObjectiveFunction for Schwefel12 {
    fn name(&self) -> &'static str {
        "Schwefel 1.2"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        let mut prefix = 0.0;
        x.iter()
            .map(|xi| {
                prefix += xi;
                prefix * prefix
            })
            .sum()
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-100.0, 100.0)
    }
}

/// Step function: `f(x) = Σ⌊xᵢ + 0.5⌋²`.
///
/// Piecewise constant plateaus; the gradient carries no information.
/// Optimum 0 everywhere on `[-0.5, 0.5)^n`.
#[derive(Clone, Debug, Default)]
pub struct Step;

impl ObjectiveFunction for Step {
    fn name(&self) -> &'static str {
        "Step"
    }

    fn evaluate(&self, x: &[f64]) -> f64 {
        x.iter()
            .map(|xi| {
                let stepped = (xi + 0.5).floor();
                stepped * stepped
            })
            .sum()
    }

    fn default_bounds(&self) -> (f64, f64) {
        (-100.0, 100.0)
    }

    fn optimum(&self, dimension: usize) -> Option<Vec<f64>> {
        // Any point of the central plateau is optimal; the origin is the
        // canonical representative.
        Some(vec![0.0; dimension])
    }
}

/// Static identifiers for the bundled benchmark functions.
///
/// Replaces runtime registration: the id set is fixed at compile time and
/// unknown ids resolve to `None`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemId {
    /// [`Sphere`]
    Sphere,
    /// [`Rastrigin`]
    Rastrigin,
    /// [`Rosenbrock`]
    Rosenbrock,
    /// [`Ackley`]
    Ackley,
    /// [`Schwefel222`]
    Schwefel222,
    /// [`Schwefel12`]
    Schwefel12,
    /// [`Step`]
    Step,
}

impl ProblemId {
    /// Every bundled benchmark, in presentation order.
    pub const ALL: [ProblemId; 7] = [
        ProblemId::Sphere,
        ProblemId::Rastrigin,
        ProblemId::Rosenbrock,
        ProblemId::Ackley,
        ProblemId::Schwefel222,
        ProblemId::Schwefel12,
        ProblemId::Step,
    ];

    /// The stable string id used by configuration layers.
    pub fn as_id(&self) -> &'static str {
        match self {
            ProblemId::Sphere => "sphere",
            ProblemId::Rastrigin => "rastrigin",
            ProblemId::Rosenbrock => "rosenbrock",
            ProblemId::Ackley => "ackley",
            ProblemId::Schwefel222 => "schwefel-2.22",
            ProblemId::Schwefel12 => "schwefel-1.2",
            ProblemId::Step => "step",
        }
    }

    /// Resolves a string id. Unknown ids yield `None`; the caller decides
    /// how to surface that.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_id() == id)
    }

    /// Builds the objective function behind this id.
    pub fn objective(&self) -> Arc<dyn ObjectiveFunction> {
        match self {
            ProblemId::Sphere => Arc::new(Sphere),
            ProblemId::Rastrigin => Arc::new(Rastrigin),
            ProblemId::Rosenbrock => Arc::new(Rosenbrock),
            ProblemId::Ackley => Arc::new(Ackley),
            ProblemId::Schwefel222 => Arc::new(Schwefel222),
            ProblemId::Schwefel12 => Arc::new(Schwefel12),
            ProblemId::Step => Arc::new(Step),
        }
    }
}
