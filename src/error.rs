//! # Error Types
//!
//! This module defines the error type shared by the engine and its strategies.
//! A returned error always aborts the current run; there is no partial result.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genetics::error::{GeneticError, Result};
//!
//! fn pick(population_size: usize, requested: usize) -> Result<usize> {
//!     if requested > population_size {
//!         return Err(GeneticError::SelectionSize {
//!             requested,
//!             available: population_size,
//!         });
//!     }
//!     Ok(requested)
//! }
//!
//! assert!(pick(3, 5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genetics::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(fitness: &[f64]) -> genetics::error::Result<f64> {
//!     fitness.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while running the genetic algorithm.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation needs at least one candidate.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when fitness is read before the candidate was evaluated.
    #[error("Unevaluated candidate: fitness was read before evaluation")]
    Unevaluated,

    /// Error that occurs when a selector is asked to keep more members than exist.
    #[error("Selection error: requested {requested} candidates from a population of {available}")]
    SelectionSize { requested: usize, available: usize },

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use genetics::error::ResultExt;
/// use rand_distr::Exp;
///
/// let err = Exp::new(-1.0_f64).context("Invalid sampling rate").unwrap_err();
/// assert!(err.to_string().starts_with("Invalid sampling rate"));
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_size_message() {
        let err = GeneticError::SelectionSize {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "Selection error: requested 5 candidates from a population of 3"
        );
    }

    #[test]
    fn test_context_wraps_foreign_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "boom",
        ));
        match io.context("While sampling") {
            Err(GeneticError::Other(msg)) => assert_eq!(msg, "While sampling: boom"),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let none: Option<u8> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
        assert_eq!(Some(3).ok_or_else_genetic(|| GeneticError::Unevaluated).unwrap(), 3);
    }
}
