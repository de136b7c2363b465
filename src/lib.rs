pub mod breeding;
pub mod candidate;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod permutation;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use candidate::EvaluatedCandidate;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EngineOptions, GeneticAlgorithm};
