//! # EngineOptions
//!
//! The `EngineOptions` struct holds the sizes that drive a run of the
//! generational engine: how many genomes to generate initially, how many
//! survive each selection, and how many selection and breeding rounds to run.
//!
//! ## Example
//!
//! ```rust
//! use genetics::evolution::options::EngineOptions;
//!
//! let custom_options = EngineOptions::new(1000, 100, 50);
//!
//! let built = EngineOptions::builder()
//!     .initial_population_size(1000)
//!     .breeding_population_size(100)
//!     .max_iterations(50)
//!     .build();
//!
//! assert_eq!(custom_options, built);
//! ```
//!
//! Sizes are not validated up front. A breeding population of one produces no
//! children, which makes the following selection fail; an empty final
//! population makes the run return `GeneticError::EmptyPopulation`.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    initial_population_size: usize,
    breeding_population_size: usize,
    max_iterations: usize,
}

impl EngineOptions {
    pub fn new(
        initial_population_size: usize,
        breeding_population_size: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            initial_population_size,
            breeding_population_size,
            max_iterations,
        }
    }

    pub fn get_initial_population_size(&self) -> usize {
        self.initial_population_size
    }

    pub fn get_breeding_population_size(&self) -> usize {
        self.breeding_population_size
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns a builder for creating an `EngineOptions` instance.
    pub fn builder() -> EngineOptionsBuilder {
        EngineOptionsBuilder::default()
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            initial_population_size: 1,
            breeding_population_size: 1,
            max_iterations: 0,
        }
    }
}

/// Builder for `EngineOptions`.
#[derive(Debug, Clone, Default)]
pub struct EngineOptionsBuilder {
    initial_population_size: Option<usize>,
    breeding_population_size: Option<usize>,
    max_iterations: Option<usize>,
}

impl EngineOptionsBuilder {
    pub fn initial_population_size(mut self, value: usize) -> Self {
        self.initial_population_size = Some(value);
        self
    }

    pub fn breeding_population_size(mut self, value: usize) -> Self {
        self.breeding_population_size = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn build(self) -> EngineOptions {
        let default = EngineOptions::default();
        EngineOptions {
            initial_population_size: self
                .initial_population_size
                .unwrap_or(default.initial_population_size),
            breeding_population_size: self
                .breeding_population_size
                .unwrap_or(default.breeding_population_size),
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let options = EngineOptions::builder().max_iterations(7).build();
        assert_eq!(options.get_initial_population_size(), 1);
        assert_eq!(options.get_breeding_population_size(), 1);
        assert_eq!(options.get_max_iterations(), 7);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = EngineOptions::new(100, 10, 5);
        let json = serde_json::to_string(&options).unwrap();
        let parsed: EngineOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }
}
