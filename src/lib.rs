pub mod algorithm;
pub mod error;
pub mod population;
pub mod problem;
pub mod rng;
pub mod selection;
pub mod stats;

// Re-export commonly used types for convenience
pub use algorithm::{create, create_by_id, Algorithm, AlgorithmId};
pub use error::{EvoError, Result};
pub use population::Individual;
pub use problem::{benchmarks::ProblemId, Problem};
pub use stats::AlgorithmStats;
