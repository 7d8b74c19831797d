//! # Selection Strategies
//!
//! Parent-selection strategies for the genetic algorithm. All strategies
//! operate on evaluated populations in the internal maximize convention
//! (higher fitness is always better) and select with replacement.

pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use rank::RankSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
