//! Frame-stepped rules for a two-combatant duel.
//!
//! `duel-core` owns the combatant state machine, the arena and its scaling,
//! logical input with key bindings, and the tunables. It has no notion of a
//! controller or a frame loop: the runtime feeds input, calls
//! [`Combatant::advance`] and [`Combatant::apply_movement`] once per frame,
//! and resolves contact between the two combatants.
pub mod arena;
pub mod combatant;
pub mod config;
pub mod cue;
pub mod error;
pub mod geometry;
pub mod input;

pub use arena::{Arena, ArenaConfig, Scale};
pub use combatant::{
    Action, Combatant, Countdown, DashGesture, MAX_PENDING_CUES, Side, Stamina, StrikePhase,
    StrikeTiming,
};
pub use config::{Attachment, CombatantConfig};
pub use cue::{Cue, VisualState};
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Direction, Rect, Velocity};
pub use input::{Button, ButtonState, InputFrame, InputSet, KeyBindings, KeyCode, KeyboardState};
