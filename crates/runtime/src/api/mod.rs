//! Public runtime API surface.
//!
//! Re-exports the pieces a frontend needs to feed input into a duel and to
//! surface assembly errors.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{
    IdleInputProvider, InputProvider, KeySource, KeyboardInputProvider, ScriptedInputProvider,
};
