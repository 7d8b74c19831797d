//! # Error Types
//!
//! This module defines the error type shared by the optimization engine.
//! It provides specific variants for the failure scenarios that can occur
//! while configuring and stepping an algorithm.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evolab::error::{EvoError, Result};
//!
//! fn check_rate(rate: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(EvoError::Configuration(
//!             "rate must be between 0.0 and 1.0".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the optimization engine.
///
/// This enum provides specific error variants for the failure scenarios
/// that may occur while configuring a problem or algorithm and while
/// stepping the search.
#[derive(Error, Debug)]
pub enum EvoError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a genotype's length does not match the
    /// problem dimension. This indicates a programming error in operator
    /// construction and is never recovered internally.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The problem dimension.
        expected: usize,
        /// The length of the supplied genotype.
        actual: usize,
    },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness evaluation produces a NaN or
    /// infinite value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when parameters of the wrong algorithm family are
    /// applied to an engine.
    #[error("Parameter mismatch: expected {expected} parameters, got {actual}")]
    ParamsMismatch {
        /// The algorithm the engine implements.
        expected: &'static str,
        /// The algorithm the supplied parameters belong to.
        actual: &'static str,
    },
}

/// A specialized Result type for engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `EvoError`.
///
/// ## Examples
///
/// ```rust
/// use evolab::error::Result;
///
/// fn may_fail() -> Result<i32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, EvoError>;
