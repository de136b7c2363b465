//! # Observers
//!
//! Observers are notified synchronously at every stage checkpoint of a run.
//! They see the population read-only; at every checkpoint each candidate has
//! already been evaluated, so observers may read fitness.
//!
//! Closures taking `(&EngineOptions, Stage, &[EvaluatedCandidate<G, R>])` are
//! observers, and [`TracingObserver`] reports each stage through `tracing`.

use std::fmt::{self, Debug};

use tracing::{debug, info};

use crate::candidate::EvaluatedCandidate;
use crate::evolution::options::EngineOptions;

/// The checkpoints of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The initial population was generated and evaluated.
    Generated,
    /// The population was reduced to the breeding population.
    Selected,
    /// A new population was bred and evaluated.
    Bred,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Generated => write!(f, "generated"),
            Stage::Selected => write!(f, "selected"),
            Stage::Bred => write!(f, "bred"),
        }
    }
}

pub trait Observer<G, R> {
    fn observe(
        &mut self,
        options: &EngineOptions,
        stage: Stage,
        population: &[EvaluatedCandidate<G, R>],
    );
}

impl<G, R, F> Observer<G, R> for F
where
    F: FnMut(&EngineOptions, Stage, &[EvaluatedCandidate<G, R>]),
{
    fn observe(
        &mut self,
        options: &EngineOptions,
        stage: Stage,
        population: &[EvaluatedCandidate<G, R>],
    ) {
        self(options, stage, population)
    }
}

/// Logs every checkpoint: one `info` event per stage and one `debug` event
/// per candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl<G, R> Observer<G, R> for TracingObserver
where
    G: Debug,
    R: Debug,
{
    fn observe(
        &mut self,
        _options: &EngineOptions,
        stage: Stage,
        population: &[EvaluatedCandidate<G, R>],
    ) {
        let headline = match stage {
            Stage::Generated => "Generated new candidates",
            Stage::Selected => "Selected the fittest candidates",
            Stage::Bred => "Created a new generation",
        };
        info!(%stage, population = population.len(), "{}", headline);

        for candidate in population {
            match candidate.fitness() {
                Ok(fitness) => debug!(genome = ?candidate.genome(), ?fitness, "candidate"),
                Err(_) => debug!(genome = ?candidate.genome(), "unevaluated candidate"),
            }
        }
    }
}
