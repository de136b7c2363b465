pub mod elitist;
pub mod roulette;
pub mod selection_strategy;

pub use elitist::ElitistSelection;
pub use roulette::{RouletteWheelSelection, SamplingRate};
pub use selection_strategy::Selector;
