//! Data-driven duel content and loaders.
//!
//! This crate houses the tunables that are not part of the combatant rules
//! themselves and provides TOML loaders for them:
//! - AI profiles (distance thresholds and sequence shapes)
//! - Duel setups (arena, combatant tunables, controllers, key layouts, seed)
//!
//! Content is read once when a duel is assembled and never changes during a
//! match.

pub mod ai;
pub mod setup;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use ai::{AiProfile, AiThresholds, SequenceShape};
pub use setup::{ControllerKind, DuelSetup, SideSetup};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
