//! # EvaluatedCandidate
//!
//! An `EvaluatedCandidate` owns one genome and caches the fitness computed for
//! it. A freshly constructed candidate is unevaluated; reading its fitness in
//! that state is an error rather than a silent default.
//!
//! ```rust
//! use genetics::candidate::EvaluatedCandidate;
//!
//! let mut candidate: EvaluatedCandidate<i32, i32> = EvaluatedCandidate::new(4);
//! assert!(candidate.fitness().is_err());
//!
//! candidate.evaluate(&|x: &i32| x * x);
//! assert_eq!(*candidate.fitness().unwrap(), 16);
//! ```

use crate::error::{GeneticError, Result};
use crate::evolution::Evaluator;

/// The fitness state of a candidate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fitness<R> {
    Unevaluated,
    Evaluated(R),
}

/// A genome together with its (possibly not yet computed) fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedCandidate<G, R> {
    genome: G,
    fitness: Fitness<R>,
}

impl<G, R> EvaluatedCandidate<G, R> {
    /// Wraps a genome; the candidate starts unevaluated.
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: Fitness::Unevaluated,
        }
    }

    pub fn genome(&self) -> &G {
        &self.genome
    }

    pub fn into_genome(self) -> G {
        self.genome
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(self.fitness, Fitness::Evaluated(_))
    }

    /// Returns the cached fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Unevaluated` if `evaluate` has not been called yet.
    pub fn fitness(&self) -> Result<&R> {
        match &self.fitness {
            Fitness::Evaluated(score) => Ok(score),
            Fitness::Unevaluated => Err(GeneticError::Unevaluated),
        }
    }

    /// Computes the fitness with `evaluator` and caches it, replacing any
    /// previously cached value.
    pub fn evaluate<E>(&mut self, evaluator: &E)
    where
        E: Evaluator<G, R> + ?Sized,
    {
        self.fitness = Fitness::Evaluated(evaluator.evaluate(&self.genome));
    }
}

impl<G, R> From<G> for EvaluatedCandidate<G, R> {
    fn from(genome: G) -> Self {
        Self::new(genome)
    }
}
