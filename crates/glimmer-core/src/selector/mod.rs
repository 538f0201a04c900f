pub mod candidates;
pub mod engine;
pub mod picker;

pub use candidates::{CandidateSets, TimeWindows};
pub use engine::ComplimentEngine;
pub use picker::SelectorState;
