//! Per-frame abstraction for sourcing combatant input.
//!
//! Every controller, human or not, answers the same question once per
//! frame: which physical keys are held right now. The duel decodes the keys
//! through the combatant's own bindings, so an AI drives its combatant
//! exactly the way a person at the keyboard would.
use std::collections::VecDeque;

use duel_core::{Combatant, InputSet, KeyBindings, KeyboardState};

/// Trait for providing held keys based on the current duel state.
///
/// Different implementations can handle:
/// - Keyboard input polled by a frontend
/// - Heuristic and random AI controllers
/// - Scripted input for tests and replays
pub trait InputProvider: Send {
    /// Keys held this frame for `me`.
    ///
    /// # Arguments
    /// * `me` - The combatant this provider drives
    /// * `opponent` - The other combatant, read-only
    fn poll(&mut self, me: &Combatant, opponent: &Combatant) -> KeyboardState;

    /// Short label used in logs.
    fn label(&self) -> &'static str {
        "custom"
    }
}

impl<P: InputProvider + ?Sized> InputProvider for Box<P> {
    fn poll(&mut self, me: &Combatant, opponent: &Combatant) -> KeyboardState {
        (**self).poll(me, opponent)
    }

    fn label(&self) -> &'static str {
        (**self).label()
    }
}

/// Never holds anything.
/// Useful for testing or as a sparring dummy.
pub struct IdleInputProvider;

impl InputProvider for IdleInputProvider {
    fn poll(&mut self, _me: &Combatant, _opponent: &Combatant) -> KeyboardState {
        KeyboardState::new()
    }

    fn label(&self) -> &'static str {
        "idle"
    }
}

/// Plays a fixed list of logical inputs, one per frame, then holds nothing.
pub struct ScriptedInputProvider {
    bindings: KeyBindings,
    frames: VecDeque<InputSet>,
}

impl ScriptedInputProvider {
    pub fn new(bindings: KeyBindings, frames: impl IntoIterator<Item = InputSet>) -> Self {
        Self {
            bindings,
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames left to play.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputProvider for ScriptedInputProvider {
    fn poll(&mut self, _me: &Combatant, _opponent: &Combatant) -> KeyboardState {
        let set = self.frames.pop_front().unwrap_or_else(InputSet::empty);
        self.bindings.press(set)
    }

    fn label(&self) -> &'static str {
        "scripted"
    }
}

/// Snapshot of a physical keyboard, supplied by a frontend.
pub trait KeySource: Send {
    fn held_keys(&mut self) -> KeyboardState;
}

impl<F> KeySource for F
where
    F: FnMut() -> KeyboardState + Send,
{
    fn held_keys(&mut self) -> KeyboardState {
        self()
    }
}

/// Human controller: forwards whatever the key source reports.
///
/// Both sides may share one source (a single keyboard); each combatant only
/// reacts to the keys in its own bindings.
pub struct KeyboardInputProvider<S> {
    source: S,
}

impl<S: KeySource> KeyboardInputProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: KeySource> InputProvider for KeyboardInputProvider<S> {
    fn poll(&mut self, _me: &Combatant, _opponent: &Combatant) -> KeyboardState {
        self.source.held_keys()
    }

    fn label(&self) -> &'static str {
        "keyboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Arena, CombatantConfig, KeyCode, Side};

    fn pair() -> (Combatant, Combatant) {
        let config = CombatantConfig::default();
        let arena = Arena::default();
        let left =
            Combatant::spawn(Side::Left, &config, arena, KeyBindings::left_side()).unwrap();
        let right =
            Combatant::spawn(Side::Right, &config, arena, KeyBindings::right_side()).unwrap();
        (left, right)
    }

    #[test]
    fn scripted_provider_plays_then_goes_quiet() {
        let (me, opponent) = pair();
        let mut provider = ScriptedInputProvider::new(
            KeyBindings::left_side(),
            [InputSet::JUMP | InputSet::RIGHT, InputSet::ATTACK],
        );

        let keys = provider.poll(&me, &opponent);
        assert!(keys.is_down(&KeyCode::from("w")));
        assert!(keys.is_down(&KeyCode::from("d")));
        assert_eq!(provider.remaining(), 1);

        let keys = provider.poll(&me, &opponent);
        assert!(keys.is_down(&KeyCode::from("f")));

        assert!(provider.poll(&me, &opponent).is_empty());
    }

    #[test]
    fn keyboard_provider_forwards_the_source() {
        let (me, opponent) = pair();
        let mut provider = KeyboardInputProvider::new(|| {
            [KeyCode::from("up"), KeyCode::from("w")]
                .into_iter()
                .collect::<KeyboardState>()
        });

        let keys = provider.poll(&me, &opponent);
        assert_eq!(keys.keys().count(), 2);
        assert_eq!(provider.label(), "keyboard");
    }

    #[test]
    fn boxed_providers_delegate() {
        let (me, opponent) = pair();
        let mut provider: Box<dyn InputProvider> = Box::new(IdleInputProvider);
        assert!(provider.poll(&me, &opponent).is_empty());
        assert_eq!(provider.label(), "idle");
    }
}
