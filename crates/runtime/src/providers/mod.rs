//! Input provider implementations for computer-controlled combatants.

pub mod ai;

pub use ai::{AiScheme, HeuristicAiProvider, RandomInputProvider, RandomSequenceProvider};
