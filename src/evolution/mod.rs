pub mod builder;
pub mod challenge;
pub mod comparator;
pub mod launcher;
pub mod observer;
pub mod options;

pub use builder::GeneticAlgorithmBuilder;
pub use challenge::{Evaluator, Generator};
pub use comparator::{Comparator, Maximize, Minimize};
pub use launcher::{GeneticAlgorithm, Population};
pub use observer::{Observer, Stage, TracingObserver};
pub use options::{EngineOptions, EngineOptionsBuilder};
