//! Contact between the two combatants, resolved after both have moved.
//!
//! Bodies never push each other sideways; the only body contact is one
//! combatant landing on the other's head. Weapons are checked against bodies
//! and shields every frame.

use duel_core::{Combatant, Rect, Side};
use tracing::{debug, info};

/// How a hit was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HitKind {
    /// Active frames of a standing strike. Knocks the defender back.
    Sword,
    /// Airborne downward blade. No knockback.
    Downstrike,
}

/// A weapon meeting the other combatant this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub attacker: Side,
    pub kind: HitKind,
    /// The sword met an active shield; nothing was applied.
    pub blocked: bool,
}

/// Bodies before this frame's movement, indexed like the combatants.
#[derive(Clone, Copy, Debug)]
pub struct Footprint {
    pub left: Rect,
    pub right: Rect,
}

impl Footprint {
    pub fn of(left: &Combatant, right: &Combatant) -> Self {
        Self {
            left: left.rect(),
            right: right.rect(),
        }
    }
}

/// Snaps a combatant that came down onto the other one to stand on its head
/// and refreshes both `on_top` flags.
pub fn resolve_stacking(left: &mut Combatant, right: &mut Combatant, before: Footprint) {
    let left_lands = lands_on(before.left, left.rect(), before.right, right.rect());
    let right_lands = lands_on(before.right, right.rect(), before.left, left.rect());

    settle(left, left_lands.then(|| right.rect().top()));
    settle(right, right_lands.then(|| left.rect().top()));
}

fn lands_on(before: Rect, after: Rect, other_before: Rect, other_after: Rect) -> bool {
    after.overlaps_horizontally(&other_after)
        && before.bottom() <= other_before.top()
        && after.bottom() >= other_after.top()
}

fn settle(combatant: &mut Combatant, surface: Option<i32>) {
    match surface {
        Some(top) => {
            if !combatant.is_on_top() {
                debug!(side = %combatant.side(), top, "landed on opponent");
            }
            combatant.rest_on(top);
        }
        None => combatant.set_on_top(false),
    }
}

/// Checks both weapons against the other combatant and applies every hit
/// that was not blocked. Both checks see the state from before either hit
/// was applied, so simultaneous hits trade.
pub fn resolve_hits(left: &mut Combatant, right: &mut Combatant) -> Vec<Hit> {
    let hits: Vec<Hit> = [check(left, right), check(right, left)]
        .into_iter()
        .flatten()
        .collect();

    for hit in &hits {
        let defender = match hit.attacker {
            Side::Left => &mut *right,
            Side::Right => &mut *left,
        };
        if hit.blocked {
            debug!(attacker = %hit.attacker, "strike blocked by shield");
            continue;
        }
        defender.take_hit(hit.kind == HitKind::Sword);
        info!(
            attacker = %hit.attacker,
            kind = %hit.kind,
            life = defender.life(),
            "hit landed"
        );
    }
    hits
}

fn check(attacker: &Combatant, defender: &Combatant) -> Option<Hit> {
    if defender.is_invincible() {
        return None;
    }
    let body = defender.rect();

    if attacker.sword_hurtbox() {
        let sword = attacker.sword_rect();
        if sword.intersects(&body) {
            let blocked = defender.shield_active() && sword.intersects(&defender.shield_rect());
            return Some(Hit {
                attacker: attacker.side(),
                kind: HitKind::Sword,
                blocked,
            });
        }
    }

    if attacker.is_downstriking() && attacker.downstrike_rect().intersects(&body) {
        return Some(Hit {
            attacker: attacker.side(),
            kind: HitKind::Downstrike,
            blocked: false,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Arena, CombatantConfig, Direction};

    fn spawn(side: Side) -> Combatant {
        Combatant::spawn(
            side,
            &CombatantConfig::default(),
            Arena::default(),
            side.default_bindings(),
        )
        .unwrap()
    }

    fn step(c: &mut Combatant) {
        c.advance();
        c.apply_movement();
    }

    /// Walks the left combatant right until the centres are `gap` apart or
    /// closer.
    fn close_in(left: &mut Combatant, right: &Combatant, gap: i32) {
        while right.rect().center_x() - left.rect().center_x() > gap {
            left.walk(Direction::Right);
            step(left);
        }
    }

    #[test]
    fn sword_hits_an_unguarded_body_once() {
        let mut left = spawn(Side::Left);
        let mut right = spawn(Side::Right);
        close_in(&mut left, &right, 60);

        left.deploy_strike();
        let mut landed = Vec::new();
        for _ in 0..24 {
            step(&mut left);
            step(&mut right);
            landed.extend(resolve_hits(&mut left, &mut right));
        }

        assert_eq!(landed.len(), 1, "invincibility stops repeats: {landed:?}");
        assert_eq!(landed[0].kind, HitKind::Sword);
        assert!(!landed[0].blocked);
        assert_eq!(right.life(), right.max_life() - 1);
        assert!(right.is_invincible());
    }

    #[test]
    fn shield_facing_the_attacker_blocks() {
        let mut left = spawn(Side::Left);
        let mut right = spawn(Side::Right);
        close_in(&mut left, &right, 60);

        right.deploy_shield();
        step(&mut right);
        left.deploy_strike();
        for _ in 0..5 {
            step(&mut left);
        }
        assert!(left.sword_hurtbox());

        let hits = resolve_hits(&mut left, &mut right);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].blocked);
        assert_eq!(right.life(), right.max_life());
        assert!(!right.is_knocked_back());
    }

    #[test]
    fn standing_apart_nothing_happens() {
        let mut left = spawn(Side::Left);
        let mut right = spawn(Side::Right);
        left.deploy_strike();
        for _ in 0..5 {
            step(&mut left);
        }
        assert!(resolve_hits(&mut left, &mut right).is_empty());
    }

    #[test]
    fn falling_onto_the_opponent_stacks() {
        let mut left = spawn(Side::Left);
        let mut right = spawn(Side::Right);
        close_in(&mut left, &right, 10);

        left.deploy_jump();
        let mut stacked = false;
        for _ in 0..120 {
            let before = Footprint::of(&left, &right);
            step(&mut left);
            step(&mut right);
            resolve_stacking(&mut left, &mut right, before);
            if left.is_on_top() {
                stacked = true;
                break;
            }
        }

        assert!(stacked);
        assert_eq!(left.rect().bottom(), right.rect().top());
        assert!(!right.is_on_top());

        // Standing still keeps the stack.
        for _ in 0..10 {
            let before = Footprint::of(&left, &right);
            step(&mut left);
            step(&mut right);
            resolve_stacking(&mut left, &mut right, before);
        }
        assert!(left.is_on_top());
        assert!(left.action().is_idle());
    }
}
