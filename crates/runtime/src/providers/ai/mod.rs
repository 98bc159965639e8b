//! Computer-controlled combatants.
//!
//! Controllers here never touch the combatant directly. They read a snapshot
//! of both fighters and answer with held keys, exactly like a player would:
//!
//! 1. **Situation**: distances, relative height, stamina and what each side
//!    is doing, measured once per decision
//! 2. **Rules**: a prioritized [`behavior_tree`] selector; the first rule that
//!    matches names a few candidate sequences
//! 3. **Selection**: one candidate is drawn from a seeded RNG
//! 4. **Playback**: the chosen [`InputSequence`] is emitted one frame at a
//!    time until it runs out or a guard interrupt replaces it
//!
//! # Core Components
//!
//! - [`HeuristicAiProvider`]: the rule-based controller
//! - [`RandomInputProvider`] and [`RandomSequenceProvider`]: sparring partners
//! - [`AiContext`]: blackboard the rules are ticked against
//! - [`DecisionContext`]: sequence playback state
//! - [`SequenceLibrary`]: named sequences built from an AI profile

pub mod context;
pub mod decision;
pub mod provider;
pub mod rules;
pub mod sequences;

pub use context::{AiContext, CombatantView, RuleMatch, Situation};
pub use decision::DecisionContext;
pub use provider::{AiScheme, HeuristicAiProvider, RandomInputProvider, RandomSequenceProvider};
pub use rules::{DecisionTree, RuleId, decision_tree};
pub use sequences::{InputSequence, RANDOM_SEQUENCE_POOL, SequenceKind, SequenceLibrary};
