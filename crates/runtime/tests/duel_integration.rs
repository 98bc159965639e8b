//! End-to-end duels driven through the public runtime API.

use std::iter::{once, repeat_n};

use duel_content::{ControllerKind, DuelSetup};
use duel_core::{Cue, InputSet, Side};
use runtime::{
    Duel, DuelBuilder, FrameReport, HitKind, IdleInputProvider, ScriptedInputProvider,
};

/// Frames of holding right that bring the left spawn to within `gap` of the
/// right spawn with default tunables (centres 1030 apart, 8 per frame).
fn walk_frames_to(gap: i32) -> usize {
    ((1030 - gap + 7) / 8) as usize
}

fn scripted_vs_idle(script: Vec<InputSet>) -> Duel {
    Duel::builder()
        .provider(
            Side::Left,
            ScriptedInputProvider::new(Side::Left.default_bindings(), script),
        )
        .provider(Side::Right, IdleInputProvider)
        .build()
        .expect("default duel builds")
}

fn run_reports(duel: &mut Duel, frames: usize) -> Vec<FrameReport> {
    (0..frames).map(|_| duel.step()).collect()
}

#[test]
fn walk_in_and_strike_costs_a_life() {
    let script = repeat_n(InputSet::RIGHT, walk_frames_to(60))
        .chain(once(InputSet::ATTACK))
        .collect();
    let mut duel = scripted_vs_idle(script);
    let reports = run_reports(&mut duel, walk_frames_to(60) + 40);

    let hits: Vec<_> = reports.iter().flat_map(|r| r.hits.iter()).collect();
    assert_eq!(hits.len(), 1, "{hits:?}");
    assert_eq!(hits[0].attacker, Side::Left);
    assert_eq!(hits[0].kind, HitKind::Sword);

    let cues: Vec<_> = reports.iter().flat_map(|r| r.cues.iter()).collect();
    assert!(cues.contains(&&(Side::Left, Cue::Strike)));

    let right = duel.combatant(Side::Right);
    assert_eq!(right.life(), right.max_life() - 1);
    assert!(right.is_invincible());
    assert_eq!(duel.outcome(), None);
}

#[test]
fn downstrike_onto_the_head_hits_without_knockback() {
    let script = repeat_n(InputSet::RIGHT, walk_frames_to(10))
        .chain(once(InputSet::JUMP))
        .chain(repeat_n(InputSet::empty(), 8))
        .chain(once(InputSet::DOWN))
        .collect();
    let mut duel = scripted_vs_idle(script);
    let reports = run_reports(&mut duel, walk_frames_to(10) + 60);

    let hits: Vec<_> = reports.iter().flat_map(|r| r.hits.iter()).collect();
    assert_eq!(hits.len(), 1, "{hits:?}");
    assert_eq!(hits[0].kind, HitKind::Downstrike);

    let right = duel.combatant(Side::Right);
    assert_eq!(right.life(), right.max_life() - 1);
    assert!(!right.is_knocked_back());

    let left = duel.combatant(Side::Left);
    assert!(left.is_on_top());
    assert_eq!(left.rect().bottom(), right.rect().top());
}

#[test]
fn same_seed_replays_the_same_match() {
    let mut setup = DuelSetup::default();
    setup.seed = 1234;
    setup.right.controller = ControllerKind::RandomSequence;

    let mut a = DuelBuilder::from_setup(&setup).build().unwrap();
    let mut b = DuelBuilder::from_setup(&setup).build().unwrap();

    for _ in 0..3_000 {
        assert_eq!(a.step(), b.step());
        for side in [Side::Left, Side::Right] {
            assert_eq!(a.combatant(side).rect(), b.combatant(side).rect());
            assert_eq!(a.combatant(side).action(), b.combatant(side).action());
        }
    }
}

#[test]
fn heuristic_controller_lands_hits_on_a_dummy() {
    let mut setup = DuelSetup::default();
    setup.seed = 7;
    setup.right.controller = ControllerKind::Idle;
    let mut duel = DuelBuilder::from_setup(&setup).build().unwrap();

    let landed = (0..6_000)
        .map(|_| duel.step())
        .flat_map(|report| report.hits)
        .filter(|hit| !hit.blocked)
        .count();

    assert!(landed > 0);
    assert_eq!(duel.combatant(Side::Left).life(), duel.combatant(Side::Left).max_life());
}

#[test]
fn outcome_is_sticky() {
    let mut setup = DuelSetup::default();
    setup.combatant.life = 1;
    setup.right.controller = ControllerKind::Idle;
    let mut duel = DuelBuilder::from_setup(&setup)
        .provider(
            Side::Left,
            ScriptedInputProvider::new(
                Side::Left.default_bindings(),
                repeat_n(InputSet::RIGHT, walk_frames_to(60)).chain(once(InputSet::ATTACK)),
            ),
        )
        .build()
        .unwrap();

    let outcome = duel.run(10_000);
    assert_eq!(outcome, Some(runtime::Outcome::Winner(Side::Left)));

    let frame = duel.frame();
    let report = duel.step();
    assert_eq!(report.frame, frame + 1);
    assert_eq!(report.outcome, outcome);
}
