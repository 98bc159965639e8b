//! Frame loop and controllers for a two-combatant duel.
//!
//! This crate wires input providers, the combatant state machines from
//! `duel-core` and contact resolution into a steppable [`Duel`]. Frontends
//! build one with [`DuelBuilder`], attach a provider per side, and call
//! [`Duel::step`] once per frame.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait and error types frontends interact with
//! - [`providers`] hosts the computer controllers and their decision rules
//! - [`duel`] hosts the frame loop and builder
//! - [`referee`] resolves stacking and weapon contact between the combatants
pub mod api;
pub mod duel;
pub mod providers;
pub mod referee;

pub use api::{
    IdleInputProvider, InputProvider, KeySource, KeyboardInputProvider, Result, RuntimeError,
    ScriptedInputProvider,
};
pub use duel::{Duel, DuelBuilder, Fighter, FrameReport, Outcome, require_headless, side_seed};
pub use providers::{AiScheme, HeuristicAiProvider, RandomInputProvider, RandomSequenceProvider};
pub use referee::{Hit, HitKind};
