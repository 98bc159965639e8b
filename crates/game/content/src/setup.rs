//! Everything needed to start a duel, as one document.

use duel_core::{ArenaConfig, Button, CombatantConfig, KeyBindings, Side};
use strum::IntoEnumIterator;

use crate::ai::AiProfile;

/// Who drives a combatant.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ControllerKind {
    /// Physical keyboard, polled by the embedding frontend.
    Human,
    /// Rule-based decision engine.
    #[default]
    Heuristic,
    /// One random button per frame.
    RandomInput,
    /// Random named sequences played to completion.
    RandomSequence,
    /// Never presses anything.
    Idle,
}

impl ControllerKind {
    pub fn is_ai(self) -> bool {
        matches!(
            self,
            Self::Heuristic | Self::RandomInput | Self::RandomSequence
        )
    }
}

/// Per-side controller and key layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SideSetup {
    pub controller: ControllerKind,
    /// Falls back to the side's default layout when absent.
    pub bindings: Option<KeyBindings>,
}

impl SideSetup {
    pub fn new(controller: ControllerKind) -> Self {
        Self {
            controller,
            bindings: None,
        }
    }

    pub fn bindings_for(&self, side: Side) -> KeyBindings {
        self.bindings
            .clone()
            .unwrap_or_else(|| side.default_bindings())
    }
}

/// Arena, tunables, AI profile and both sides.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelSetup {
    pub arena: ArenaConfig,
    pub combatant: CombatantConfig,
    pub ai: AiProfile,
    pub left: SideSetup,
    pub right: SideSetup,
    /// Seed for every random choice made by AI controllers.
    pub seed: u64,
}

impl DuelSetup {
    pub fn side(&self, side: Side) -> &SideSetup {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideSetup {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Keys bound on both sides, which would drive both combatants at once
    /// from a shared keyboard.
    pub fn shared_keys(&self) -> Vec<String> {
        let left = self.left.bindings_for(Side::Left);
        let right = self.right.bindings_for(Side::Right);
        Button::iter()
            .map(|button| left.key(button))
            .filter(|key| right.button(key).is_some())
            .map(|key| key.as_str().to_string())
            .collect()
    }
}
