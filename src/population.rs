//! # Individual and Population Model
//!
//! The [`Individual`] pairs a genotype (a real vector of the problem's
//! dimension) with its fitness. A population is an ordered
//! `Vec<Individual>`; this module adds the population-level measures the
//! engines and the statistics tracker share: best index, average fitness
//! and diversity (mean pairwise Euclidean distance).

/// A candidate solution: genotype plus the fitness it evaluated to.
///
/// The fitness is stored in the owning algorithm's internal convention
/// (maximize for GA/ES/DE/PSO, raw objective for ABC/SA).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// The real-valued solution vector; its length always equals the
    /// problem dimension.
    pub genotype: Vec<f64>,
    /// The evaluated quality of the genotype.
    pub fitness: f64,
}

impl Individual {
    /// Creates an individual from an evaluated genotype.
    pub fn new(genotype: Vec<f64>, fitness: f64) -> Self {
        Self { genotype, fitness }
    }

    /// Euclidean distance between this individual's genotype and another's.
    pub fn distance(&self, other: &Individual) -> f64 {
        self.genotype
            .iter()
            .zip(other.genotype.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// The index of the highest-fitness individual, or `None` for an empty
/// population. Ties resolve to the earliest index.
pub fn best_index(population: &[Individual]) -> Option<usize> {
    population
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}

/// The index of the lowest-fitness individual, or `None` for an empty
/// population.
pub fn worst_index(population: &[Individual]) -> Option<usize> {
    population
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}

/// Arithmetic mean of the population's fitness values; 0 for an empty
/// population.
pub fn average_fitness(population: &[Individual]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|ind| ind.fitness).sum::<f64>() / population.len() as f64
}

/// Mean pairwise Euclidean distance across the population.
///
/// Used as a stagnation signal by the diversity-based convergence tests.
/// Populations of fewer than two individuals have diversity 0.
pub fn diversity(population: &[Individual]) -> f64 {
    let n = population.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut pairs = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            total += population[i].distance(&population[j]);
            pairs += 1;
        }
    }
    total / pairs as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ind(genotype: Vec<f64>, fitness: f64) -> Individual {
        Individual::new(genotype, fitness)
    }

    #[test]
    fn test_distance() {
        let a = ind(vec![0.0, 0.0], 0.0);
        let b = ind(vec![3.0, 4.0], 0.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_best_and_worst_index() {
        let population = vec![
            ind(vec![0.0], 1.0),
            ind(vec![0.0], 3.0),
            ind(vec![0.0], -2.0),
        ];
        assert_eq!(best_index(&population), Some(1));
        assert_eq!(worst_index(&population), Some(2));
        assert_eq!(best_index(&[]), None);
    }

    #[test]
    fn test_best_index_tie_takes_earliest() {
        let population = vec![ind(vec![0.0], 5.0), ind(vec![1.0], 5.0)];
        assert_eq!(best_index(&population), Some(0));
    }

    #[test]
    fn test_average_fitness() {
        let population = vec![ind(vec![0.0], 2.0), ind(vec![0.0], 4.0)];
        assert_relative_eq!(average_fitness(&population), 3.0);
        assert_relative_eq!(average_fitness(&[]), 0.0);
    }

    #[test]
    fn test_diversity_single_point_is_zero() {
        let population = vec![ind(vec![1.0, 2.0], 0.0)];
        assert_relative_eq!(diversity(&population), 0.0);
    }

    #[test]
    fn test_diversity_mean_pairwise() {
        // Three collinear points at 0, 3 and 6: distances 3, 6, 3.
        let population = vec![
            ind(vec![0.0], 0.0),
            ind(vec![3.0], 0.0),
            ind(vec![6.0], 0.0),
        ];
        assert_relative_eq!(diversity(&population), 4.0);
    }

    #[test]
    fn test_identical_population_has_zero_diversity() {
        let population = vec![ind(vec![1.0, 1.0], 0.0); 4];
        assert_relative_eq!(diversity(&population), 0.0);
    }
}
