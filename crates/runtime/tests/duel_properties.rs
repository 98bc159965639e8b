//! Referee invariants under arbitrary input from both sides.

use duel_core::{InputSet, Side};
use proptest::prelude::*;
use runtime::{Duel, ScriptedInputProvider};

fn scripted(left: Vec<u8>, right: Vec<u8>) -> Duel {
    let frames = |bits: Vec<u8>| bits.into_iter().map(InputSet::from_bits_truncate);
    Duel::builder()
        .provider(
            Side::Left,
            ScriptedInputProvider::new(Side::Left.default_bindings(), frames(left)),
        )
        .provider(
            Side::Right,
            ScriptedInputProvider::new(Side::Right.default_bindings(), frames(right)),
        )
        .build()
        .expect("default duel builds")
}

proptest! {
    #[test]
    fn life_only_drops_through_reported_hits(
        left in prop::collection::vec(0u8..64, 1..600),
        right in prop::collection::vec(0u8..64, 1..600),
    ) {
        let frames = left.len().max(right.len());
        let mut duel = scripted(left, right);

        for _ in 0..frames {
            let before = [Side::Left, Side::Right].map(|side| duel.combatant(side).life());
            let report = duel.step();

            for (index, side) in [Side::Left, Side::Right].into_iter().enumerate() {
                let landed = report
                    .hits
                    .iter()
                    .filter(|hit| hit.attacker == side.opponent() && !hit.blocked)
                    .count() as u32;
                prop_assert!(landed <= 1);

                let after = duel.combatant(side).life();
                prop_assert_eq!(before[index] - after, landed.min(before[index]));
                if landed == 1 {
                    prop_assert!(duel.combatant(side).is_invincible());
                }
            }

            prop_assert!(
                !(duel.combatant(Side::Left).is_on_top() && duel.combatant(Side::Right).is_on_top())
            );
        }
    }
}
