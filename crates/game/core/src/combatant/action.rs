//! The combatant's exclusive action.
//!
//! Jumping, falling, dashing, striking, downstriking, landing stun and
//! shielding are mutually exclusive, so they live in a single enum and the
//! payload carries the per-action timer.
//!
//! # Timers
//!
//! Profile-driven actions (jump, dash, strike) count `elapsed` frames upward
//! and index into their profile; fixed-length holds (landing stun, shield)
//! count `remaining` frames down with a [`Countdown`].

use super::countdown::Countdown;
use crate::geometry::Direction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// Standing on the ground or on the opponent's head.
    #[default]
    Idle,

    /// Following the jump profile; `elapsed` is the next profile index. Once
    /// it equals the profile length, the next advance ends the jump.
    Jumping { elapsed: u32 },

    /// Airborne without upward impulse; speed ramps with `ticker`.
    Falling { ticker: u32 },

    /// Following the dash profile in `direction`.
    Dashing { direction: Direction, elapsed: u32 },

    /// Sword swing; see [`StrikePhase`].
    Striking { elapsed: u32 },

    /// Sword pointed down for the rest of the fall.
    Downstriking { ticker: u32 },

    /// Recovery after a downstrike lands.
    LandingStunned { remaining: Countdown },

    /// Guard raised.
    Shielding { remaining: Countdown },
}

impl Action {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        matches!(self, Self::Jumping { .. })
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        matches!(self, Self::Falling { .. })
    }

    #[inline]
    pub fn is_dashing(&self) -> bool {
        matches!(self, Self::Dashing { .. })
    }

    #[inline]
    pub fn is_striking(&self) -> bool {
        matches!(self, Self::Striking { .. })
    }

    #[inline]
    pub fn is_downstriking(&self) -> bool {
        matches!(self, Self::Downstriking { .. })
    }

    #[inline]
    pub fn is_landing_stunned(&self) -> bool {
        matches!(self, Self::LandingStunned { .. })
    }

    #[inline]
    pub fn is_shielding(&self) -> bool {
        matches!(self, Self::Shielding { .. })
    }

    /// Stable snake_case name, used in log fields.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Phase of a strike, derived from its elapsed frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StrikePhase {
    Windup,
    Active,
    Recovery,
}

/// Frame lengths of the three strike phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrikeTiming {
    pub windup: u32,
    pub active: u32,
    pub recovery: u32,
}

impl StrikeTiming {
    pub const fn total(&self) -> u32 {
        self.windup + self.active + self.recovery
    }

    /// Phase after `elapsed` advances. The first advance after deploying is
    /// `elapsed == 1`.
    pub fn phase(&self, elapsed: u32) -> StrikePhase {
        if elapsed <= self.windup {
            StrikePhase::Windup
        } else if elapsed <= self.windup + self.active {
            StrikePhase::Active
        } else {
            StrikePhase::Recovery
        }
    }
}
