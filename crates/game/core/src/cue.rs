//! Outbound notifications for the audio and rendering sinks.

use crate::geometry::Rect;

/// One-shot sound cue emitted by a combatant during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    Jump,
    Dash,
    Strike,
    Shield,
    SwordHitsGround,
}

/// Everything a renderer needs to draw one combatant for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualState {
    pub body: Rect,
    /// Present while the strike's active phase is live.
    pub sword: Option<Rect>,
    /// Present for the whole downstrike fall.
    pub downstrike: Option<Rect>,
    /// Present while the guard holds.
    pub shield: Option<Rect>,
    /// Renderers typically blink the sprite while this is set.
    pub invincible: bool,
}
