//! Tunables for computer-controlled combatants.
//!
//! Distances are in design units and get scaled by the arena at runtime;
//! sequence shapes are in frames.

use duel_core::Scale;

/// Horizontal and vertical distance bands the decision rules test against.
///
/// All comparisons use body centres except the edge test, which uses the
/// body's left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiThresholds {
    /// `|dx|` above this is far.
    pub far: i32,
    /// `|dx|` below this is close.
    pub close: i32,
    /// Lower bound of the medium band (inclusive).
    pub medium_low: i32,
    /// Upper bound of the medium band (inclusive).
    pub medium_high: i32,
    /// Max `|dx|` for counting as directly above the opponent.
    pub above: i32,
    /// Max `|dx|` for counting as directly below the opponent.
    pub below: i32,
    /// Distance from a screen edge that counts as cornered.
    pub edge: i32,
}

impl AiThresholds {
    pub const DEFAULT_FAR: i32 = 160;
    pub const DEFAULT_CLOSE: i32 = 100;
    pub const DEFAULT_ABOVE: i32 = 20;
    pub const DEFAULT_BELOW: i32 = 50;
    pub const DEFAULT_EDGE: i32 = 100;

    /// Same thresholds in runtime units.
    pub fn scaled(&self, scale: Scale) -> Self {
        Self {
            far: scale.apply(self.far),
            close: scale.apply(self.close),
            medium_low: scale.apply(self.medium_low),
            medium_high: scale.apply(self.medium_high),
            above: scale.apply(self.above),
            below: scale.apply(self.below),
            edge: scale.apply(self.edge),
        }
    }

    /// Human-readable problems that do not prevent a match from running.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.medium_low > self.medium_high {
            warnings.push(format!(
                "medium band is inverted ({} > {})",
                self.medium_low, self.medium_high
            ));
        }
        if self.close > self.far {
            warnings.push(format!(
                "close threshold {} exceeds far threshold {}",
                self.close, self.far
            ));
        }
        if self.medium_low != self.close || self.medium_high != self.far {
            warnings.push("medium band does not line up with close/far; some distances match no range rule".to_string());
        }
        warnings
    }
}

impl Default for AiThresholds {
    fn default() -> Self {
        Self {
            far: Self::DEFAULT_FAR,
            close: Self::DEFAULT_CLOSE,
            medium_low: Self::DEFAULT_CLOSE,
            medium_high: Self::DEFAULT_FAR,
            above: Self::DEFAULT_ABOVE,
            below: Self::DEFAULT_BELOW,
            edge: Self::DEFAULT_EDGE,
        }
    }
}

/// Frame counts that shape the named input sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequenceShape {
    /// Frames a single walk holds the direction.
    pub walk_frames: u32,
    /// First tap of the dash gesture.
    pub dash_press_frames: u32,
    /// Gap between the taps.
    pub dash_release_frames: u32,
    /// Second tap, held through the dash.
    pub dash_hold_frames: u32,
    /// Extra walks after a jump before the downstrike press.
    pub jump_carry_walks: u32,
    /// Frames of jump held before pressing down in a standing downstrike.
    pub downstrike_lead_in: u32,
    /// Walks chained when escaping a corner.
    pub flee_walks: u32,
    /// Walks chained when stepping out from under the opponent.
    pub double_walks: u32,
}

impl Default for SequenceShape {
    fn default() -> Self {
        Self {
            walk_frames: 10,
            dash_press_frames: 3,
            dash_release_frames: 3,
            dash_hold_frames: 5,
            jump_carry_walks: 2,
            downstrike_lead_in: 5,
            flee_walks: 3,
            double_walks: 2,
        }
    }
}

/// Full tuning for one AI controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiProfile {
    pub thresholds: AiThresholds,
    pub sequences: SequenceShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_warnings() {
        assert!(AiThresholds::default().warnings().is_empty());
    }

    #[test]
    fn scaling_applies_to_every_band() {
        let scaled = AiThresholds::default().scaled(Scale::new(0.5).unwrap());
        assert_eq!(scaled.far, 80);
        assert_eq!(scaled.close, 50);
        assert_eq!(scaled.above, 10);
        assert_eq!(scaled.edge, 50);
    }

    #[test]
    fn inverted_band_is_reported() {
        let thresholds = AiThresholds {
            medium_low: 200,
            ..AiThresholds::default()
        };
        let warnings = thresholds.warnings();
        assert!(warnings.iter().any(|w| w.contains("inverted")));
    }
}
