//! AI context for rule-based decision making.
//!
//! The [`AiContext`] is the blackboard the decision tree is ticked against.
//! It holds a [`Situation`] (what the controller sees this frame), the
//! thresholds in runtime units, and the slot the winning rule writes its
//! candidates into.

use duel_content::AiThresholds;
use duel_core::{Combatant, Direction};

use super::rules::RuleId;
use super::sequences::SequenceKind;

/// What one combatant looks like to the decision rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatantView {
    pub center_x: i32,
    pub center_y: i32,
    /// Left edge of the body.
    pub x: i32,
    pub stamina: u32,
    pub striking: bool,
    pub landing_stunned: bool,
}

impl CombatantView {
    pub fn of(combatant: &Combatant) -> Self {
        let rect = combatant.rect();
        Self {
            center_x: rect.center_x(),
            center_y: rect.center_y(),
            x: rect.x,
            stamina: combatant.stamina().current(),
            striking: combatant.is_striking(),
            landing_stunned: combatant.is_landing_stunned(),
        }
    }
}

/// Read-only snapshot of both combatants, taken at the start of a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Situation {
    pub me: CombatantView,
    pub opponent: CombatantView,
    pub arena_width: i32,
}

impl Situation {
    pub fn observe(me: &Combatant, opponent: &Combatant) -> Self {
        Self {
            me: CombatantView::of(me),
            opponent: CombatantView::of(opponent),
            arena_width: me.arena().width(),
        }
    }

    /// Horizontal distance between body centres.
    pub fn distance(&self) -> i32 {
        (self.opponent.center_x - self.me.center_x).abs()
    }

    pub fn opponent_is_left(&self) -> bool {
        self.opponent.center_x < self.me.center_x
    }

    pub fn opponent_is_right(&self) -> bool {
        self.opponent.center_x > self.me.center_x
    }

    /// Direction to walk to close the gap; right when exactly level.
    pub fn toward(&self) -> Direction {
        if self.opponent_is_left() {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn is_far(&self, thresholds: &AiThresholds) -> bool {
        self.distance() > thresholds.far
    }

    pub fn is_close(&self, thresholds: &AiThresholds) -> bool {
        self.distance() < thresholds.close
    }

    pub fn is_medium(&self, thresholds: &AiThresholds) -> bool {
        (thresholds.medium_low..=thresholds.medium_high).contains(&self.distance())
    }

    /// Higher than the opponent (smaller y) and roughly over them.
    pub fn is_above(&self, thresholds: &AiThresholds) -> bool {
        self.me.center_y < self.opponent.center_y && self.distance() < thresholds.above
    }

    /// Lower than the opponent and roughly under them.
    pub fn is_below(&self, thresholds: &AiThresholds) -> bool {
        self.me.center_y > self.opponent.center_y && self.distance() < thresholds.below
    }

    pub fn near_left_edge(&self, thresholds: &AiThresholds) -> bool {
        self.me.x.abs() < thresholds.edge
    }

    pub fn near_right_edge(&self, thresholds: &AiThresholds) -> bool {
        (self.me.x - self.arena_width).abs() < thresholds.edge
    }

    pub fn has_stamina(&self, amount: u32) -> bool {
        self.me.stamina >= amount
    }
}

/// Candidates written by the rule that fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: RuleId,
    pub candidates: Vec<SequenceKind>,
}

/// Context for one decision.
#[derive(Clone, Debug)]
pub struct AiContext {
    /// What the controller sees this frame.
    pub situation: Situation,

    /// Distance bands in runtime units.
    pub thresholds: AiThresholds,

    /// Set by exactly one rule per tick.
    decision: Option<RuleMatch>,
}

impl AiContext {
    pub fn new(situation: Situation, thresholds: AiThresholds) -> Self {
        Self {
            situation,
            thresholds,
            decision: None,
        }
    }

    /// Records the winning rule and its candidate sequences.
    ///
    /// # Panics
    ///
    /// Panics if a rule already decided during this tick or if `candidates`
    /// is empty.
    pub fn decide(&mut self, rule: RuleId, candidates: impl Into<Vec<SequenceKind>>) {
        let candidates = candidates.into();
        assert!(
            self.decision.is_none(),
            "{rule} fired after {:?} already decided",
            self.decision.as_ref().map(|m| m.rule)
        );
        assert!(!candidates.is_empty(), "{rule} offered no candidates");
        self.decision = Some(RuleMatch { rule, candidates });
    }

    pub fn decision(&self) -> Option<&RuleMatch> {
        self.decision.as_ref()
    }

    pub fn take_decision(&mut self) -> Option<RuleMatch> {
        self.decision.take()
    }

    // ========================================================================
    // Shorthands for rule predicates
    // ========================================================================

    pub fn is_far(&self) -> bool {
        self.situation.is_far(&self.thresholds)
    }

    pub fn is_close(&self) -> bool {
        self.situation.is_close(&self.thresholds)
    }

    pub fn is_medium(&self) -> bool {
        self.situation.is_medium(&self.thresholds)
    }

    pub fn is_above(&self) -> bool {
        self.situation.is_above(&self.thresholds)
    }

    pub fn is_below(&self) -> bool {
        self.situation.is_below(&self.thresholds)
    }

    pub fn has_stamina(&self, amount: u32) -> bool {
        self.situation.has_stamina(amount)
    }

    pub fn toward(&self) -> Direction {
        self.situation.toward()
    }
}
