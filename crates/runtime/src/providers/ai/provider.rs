//! Computer controllers implementing [`InputProvider`].

use behavior_tree::Behavior;
use duel_content::{AiProfile, AiThresholds, ControllerKind};
use duel_core::{Button, Combatant, InputSet, KeyBindings, KeyboardState};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use tracing::{debug, trace, warn};

use super::context::{AiContext, Situation};
use super::decision::DecisionContext;
use super::rules::{DecisionTree, decision_tree};
use super::sequences::{RANDOM_SEQUENCE_POOL, SequenceKind, SequenceLibrary};
use crate::api::InputProvider;

/// Rule-based controller that plays named input sequences.
///
/// Each frame the provider:
/// 1. Interrupts with a guard when the opponent swings at close range
///    (at most once per selected sequence, and only with stamina to spend)
/// 2. Ticks the [`decision_tree`] when the current sequence is exhausted and
///    picks one of the winning rule's candidates at random
/// 3. Emits the frame under the cursor as held keys
///
/// All randomness comes from a seeded ChaCha stream, so two providers built
/// with the same seed make the same choices in the same situations.
pub struct HeuristicAiProvider {
    bindings: KeyBindings,
    thresholds: AiThresholds,
    library: SequenceLibrary,
    tree: DecisionTree,
    decision: DecisionContext,
    rng: ChaCha8Rng,
}

impl HeuristicAiProvider {
    /// `profile` thresholds are in design units; they are scaled to the
    /// combatant's arena every frame.
    pub fn new(bindings: KeyBindings, profile: &AiProfile, seed: u64) -> Self {
        Self {
            bindings,
            thresholds: profile.thresholds,
            library: SequenceLibrary::new(&profile.sequences),
            tree: decision_tree(),
            decision: DecisionContext::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn decision(&self) -> &DecisionContext {
        &self.decision
    }

    /// Logical input for this frame.
    pub fn next_input(&mut self, me: &Combatant, opponent: &Combatant) -> InputSet {
        let situation = Situation::observe(me, opponent);
        let thresholds = self.thresholds.scaled(me.arena().scale());

        if !self.decision.is_interrupted()
            && situation.is_close(&thresholds)
            && situation.opponent.striking
            && situation.has_stamina(1)
        {
            debug!(side = %me.side(), "guard interrupt");
            self.decision
                .interrupt(self.library.get(SequenceKind::Guard).clone());
        }

        if self.decision.is_exhausted() {
            let kind = self.select(situation, thresholds);
            self.decision.select(self.library.get(kind).clone());
        }

        self.decision.advance().unwrap_or_default()
    }

    fn select(&mut self, situation: Situation, thresholds: AiThresholds) -> SequenceKind {
        let mut ctx = AiContext::new(situation, thresholds);
        self.tree.tick(&mut ctx);

        let Some(decision) = ctx.take_decision() else {
            warn!("decision tree produced no decision, holding");
            return SequenceKind::Hold;
        };

        let kind = decision
            .candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(SequenceKind::Hold);
        debug!(
            rule = %decision.rule,
            sequence = %kind,
            candidates = decision.candidates.len(),
            "sequence selected"
        );
        kind
    }
}

impl InputProvider for HeuristicAiProvider {
    fn poll(&mut self, me: &Combatant, opponent: &Combatant) -> KeyboardState {
        let input = self.next_input(me, opponent);
        self.bindings.press(input)
    }

    fn label(&self) -> &'static str {
        "heuristic"
    }
}

/// Presses one uniformly chosen button every frame.
pub struct RandomInputProvider {
    bindings: KeyBindings,
    buttons: Vec<Button>,
    rng: ChaCha8Rng,
}

impl RandomInputProvider {
    pub fn new(bindings: KeyBindings, seed: u64) -> Self {
        Self {
            bindings,
            buttons: Button::iter().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl InputProvider for RandomInputProvider {
    fn poll(&mut self, _me: &Combatant, _opponent: &Combatant) -> KeyboardState {
        let input = self
            .buttons
            .choose(&mut self.rng)
            .map(|&button| InputSet::from(button))
            .unwrap_or_default();
        self.bindings.press(input)
    }

    fn label(&self) -> &'static str {
        "random_input"
    }
}

/// Plays random sequences from [`RANDOM_SEQUENCE_POOL`] to completion,
/// ignoring the opponent.
pub struct RandomSequenceProvider {
    bindings: KeyBindings,
    library: SequenceLibrary,
    decision: DecisionContext,
    rng: ChaCha8Rng,
}

impl RandomSequenceProvider {
    pub fn new(bindings: KeyBindings, profile: &AiProfile, seed: u64) -> Self {
        Self {
            bindings,
            library: SequenceLibrary::new(&profile.sequences),
            decision: DecisionContext::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl InputProvider for RandomSequenceProvider {
    fn poll(&mut self, me: &Combatant, _opponent: &Combatant) -> KeyboardState {
        if self.decision.is_exhausted() {
            let kind = RANDOM_SEQUENCE_POOL
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(SequenceKind::Hold);
            trace!(side = %me.side(), sequence = %kind, "random sequence selected");
            self.decision.select(self.library.get(kind).clone());
        }
        let input = self.decision.advance().unwrap_or_default();
        self.bindings.press(input)
    }

    fn label(&self) -> &'static str {
        "random_sequence"
    }
}

/// Which computer controller to build.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum AiScheme {
    Heuristic,
    RandomInput,
    RandomSequence,
}

impl AiScheme {
    /// `None` for controllers that are not computer-driven.
    pub fn from_controller(kind: ControllerKind) -> Option<Self> {
        match kind {
            ControllerKind::Heuristic => Some(Self::Heuristic),
            ControllerKind::RandomInput => Some(Self::RandomInput),
            ControllerKind::RandomSequence => Some(Self::RandomSequence),
            ControllerKind::Human | ControllerKind::Idle => None,
        }
    }

    pub fn build(
        self,
        bindings: KeyBindings,
        profile: &AiProfile,
        seed: u64,
    ) -> Box<dyn InputProvider> {
        match self {
            Self::Heuristic => Box::new(HeuristicAiProvider::new(bindings, profile, seed)),
            Self::RandomInput => Box::new(RandomInputProvider::new(bindings, seed)),
            Self::RandomSequence => Box::new(RandomSequenceProvider::new(bindings, profile, seed)),
        }
    }
}
