//! Prioritized decision rules, expressed as a behavior tree.
//!
//! The root is a selector: rules are tried top to bottom and the first whose
//! condition holds writes its candidate sequences into the context. The last
//! rule always fires, so every tick produces a decision.
//!
//! ```text
//! selector
//!     ├─ exhausted      stamina 0            → back away from the nearer edge
//!     ├─ above          over the opponent    → downstrike or step off
//!     ├─ below          under the opponent   → step or dash out
//!     ├─ far            |dx| > far           → walk in
//!     ├─ close          |dx| < close         → strike, guard, or keep walking
//!     ├─ medium         medium band          → jump-downstrike, dash, or walk
//!     ├─ stun_exploit   opponent stunned     → punish
//!     └─ hold           always               → stand still
//! ```
//!
//! `stun_exploit` sits behind the three range rules, which together cover
//! every horizontal distance with the default thresholds, so it only fires
//! when the bands are tuned to leave a gap.

use behavior_tree::builder::{action, guarded, selector};
use behavior_tree::{Behavior, Status};
use duel_core::Direction;

use super::context::AiContext;
use super::sequences::SequenceKind as K;

/// A boxed tree ticked against [`AiContext`].
pub type DecisionTree = Box<dyn Behavior<AiContext>>;

/// Which rule produced a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RuleId {
    Exhausted,
    Above,
    Below,
    Far,
    Close,
    Medium,
    StunExploit,
    Hold,
}

/// Builds the full rule cascade.
pub fn decision_tree() -> DecisionTree {
    selector(vec![
        exhausted(),
        above(),
        below(),
        far(),
        close(),
        medium(),
        stun_exploit(),
        hold(),
    ])
}

/// Out of stamina: get away from a corner the opponent is pinning us into,
/// otherwise wait.
fn exhausted() -> DecisionTree {
    guarded(
        "exhausted",
        |ctx: &AiContext| !ctx.has_stamina(1),
        |ctx: &mut AiContext| {
            let s = ctx.situation;
            let t = ctx.thresholds;
            let candidates = if s.opponent_is_left() && s.near_right_edge(&t) {
                vec![K::flee(Direction::Left), K::jump(Direction::Left)]
            } else if s.opponent_is_right() && s.near_left_edge(&t) {
                vec![K::flee(Direction::Right), K::jump(Direction::Right)]
            } else {
                vec![K::Hold]
            };
            ctx.decide(RuleId::Exhausted, candidates);
            Status::Success
        },
    )
}

fn above() -> DecisionTree {
    guarded("above", AiContext::is_above, |ctx: &mut AiContext| {
        ctx.decide(RuleId::Above, [K::Downstrike, K::WalkLeft, K::WalkRight]);
        Status::Success
    })
}

fn below() -> DecisionTree {
    guarded("below", AiContext::is_below, |ctx: &mut AiContext| {
        let candidates = if ctx.has_stamina(3) {
            vec![K::DashLeft, K::DashRight, K::DoubleWalkLeft, K::DoubleWalkRight]
        } else {
            vec![K::DoubleWalkLeft, K::DoubleWalkRight]
        };
        ctx.decide(RuleId::Below, candidates);
        Status::Success
    })
}

fn far() -> DecisionTree {
    guarded("far", AiContext::is_far, |ctx: &mut AiContext| {
        let toward = ctx.toward();
        ctx.decide(RuleId::Far, [K::walk(toward)]);
        Status::Success
    })
}

/// In reach: keep walking through our own strike, guard theirs, or strike.
fn close() -> DecisionTree {
    guarded("close", AiContext::is_close, |ctx: &mut AiContext| {
        let s = ctx.situation;
        let toward = s.toward();
        let choice = if s.me.striking {
            K::walk(toward)
        } else if s.opponent.striking {
            K::Guard
        } else {
            K::step_strike(toward)
        };
        ctx.decide(RuleId::Close, [choice]);
        Status::Success
    })
}

fn medium() -> DecisionTree {
    guarded(
        "medium",
        |ctx: &AiContext| {
            let s = ctx.situation;
            (s.opponent_is_left() || s.opponent_is_right()) && ctx.is_medium()
        },
        |ctx: &mut AiContext| {
            let toward = ctx.toward();
            let candidates = if ctx.has_stamina(2) {
                vec![K::jump_downstrike(toward), K::dash(toward), K::walk(toward)]
            } else {
                vec![K::jump_downstrike(toward), K::walk(toward)]
            };
            ctx.decide(RuleId::Medium, candidates);
            Status::Success
        },
    )
}

fn stun_exploit() -> DecisionTree {
    guarded(
        "stun_exploit",
        |ctx: &AiContext| {
            let s = ctx.situation;
            (s.opponent_is_left() || s.opponent_is_right()) && s.opponent.landing_stunned
        },
        |ctx: &mut AiContext| {
            let toward = ctx.toward();
            let candidates = if ctx.is_far() && ctx.has_stamina(3) {
                vec![K::walk(toward), K::dash(toward)]
            } else if (ctx.is_medium() || ctx.is_close()) && ctx.has_stamina(1) {
                vec![K::walk_strike(toward)]
            } else {
                vec![K::Hold]
            };
            ctx.decide(RuleId::StunExploit, candidates);
            Status::Success
        },
    )
}

fn hold() -> DecisionTree {
    action("hold", |ctx: &mut AiContext| {
        ctx.decide(RuleId::Hold, [K::Hold]);
        Status::Success
    })
}
