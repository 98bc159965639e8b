//! Logical input and key bindings.
//!
//! Human players and AI controllers both speak in physical keys
//! ([`KeyboardState`]); each combatant owns a [`KeyBindings`] table that turns
//! those keys into a logical [`InputFrame`]. An AI bound to the same table
//! therefore produces exactly the events a human at that keyboard would.

use std::collections::BTreeSet;

use bitflags::bitflags;
use strum::IntoEnumIterator;

use crate::geometry::Direction;

/// Logical button understood by the combatant state machine.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Button {
    #[strum(to_string = "jump")]
    Jump,
    #[strum(to_string = "left")]
    Left,
    #[strum(to_string = "right")]
    Right,
    #[strum(to_string = "down")]
    Down,
    #[strum(to_string = "attack", serialize = "sword")]
    Attack,
    #[strum(to_string = "guard", serialize = "shield")]
    Guard,
}

impl Button {
    /// The single-member set for this button.
    pub const fn as_set(self) -> InputSet {
        match self {
            Self::Jump => InputSet::JUMP,
            Self::Left => InputSet::LEFT,
            Self::Right => InputSet::RIGHT,
            Self::Down => InputSet::DOWN,
            Self::Attack => InputSet::ATTACK,
            Self::Guard => InputSet::GUARD,
        }
    }

    /// Horizontal button for a direction.
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

bitflags! {
    /// A set of buttons held together during one frame.
    ///
    /// Sequences in the decision engine are lists of these; a single button
    /// and a simultaneous combination are represented the same way.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputSet: u8 {
        const JUMP = 1 << 0;
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const DOWN = 1 << 3;
        const ATTACK = 1 << 4;
        const GUARD = 1 << 5;
    }
}

impl InputSet {
    /// Buttons contained in this set, in declaration order.
    pub fn buttons(self) -> impl Iterator<Item = Button> {
        Button::iter().filter(move |b| self.contains(b.as_set()))
    }

    /// Direction button for the given side.
    pub const fn walk(direction: Direction) -> Self {
        Button::from_direction(direction).as_set()
    }
}

impl From<Button> for InputSet {
    fn from(button: Button) -> Self {
        button.as_set()
    }
}

/// Pressed/released state of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// One frame of logical input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pressed: InputSet,
}

impl InputFrame {
    pub const EMPTY: Self = Self {
        pressed: InputSet::empty(),
    };

    pub const fn new(pressed: InputSet) -> Self {
        Self { pressed }
    }

    /// Decodes held physical keys through a binding table.
    pub fn from_keys(keys: &KeyboardState, bindings: &KeyBindings) -> Self {
        let pressed = Button::iter()
            .filter(|&button| keys.is_down(bindings.key(button)))
            .fold(InputSet::empty(), |set, button| set | button.as_set());
        Self { pressed }
    }

    #[inline]
    pub fn pressed(&self) -> InputSet {
        self.pressed
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(button.as_set())
    }

    pub fn state(&self, button: Button) -> ButtonState {
        if self.is_pressed(button) {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }

    /// Full button → state mapping for this frame.
    pub fn states(&self) -> impl Iterator<Item = (Button, ButtonState)> + '_ {
        Button::iter().map(|button| (button, self.state(button)))
    }

    /// The single horizontal direction held this frame.
    ///
    /// Holding both left and right cancels out.
    pub fn horizontal(&self) -> Option<Direction> {
        match (self.is_pressed(Button::Left), self.is_pressed(Button::Right)) {
            (true, false) => Some(Direction::Left),
            (false, true) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<InputSet> for InputFrame {
    fn from(pressed: InputSet) -> Self {
        Self::new(pressed)
    }
}

/// Physical key identifier, e.g. `"w"` or `"up"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyCode(pub String);

impl KeyCode {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyCode {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Physical keys held during one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: BTreeSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn is_down(&self, key: &KeyCode) -> bool {
        self.held.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.held.iter()
    }
}

impl FromIterator<KeyCode> for KeyboardState {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// Logical button → physical key table for one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBindings {
    pub jump: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub down: KeyCode,
    #[cfg_attr(feature = "serde", serde(alias = "sword"))]
    pub attack: KeyCode,
    #[cfg_attr(feature = "serde", serde(alias = "shield"))]
    pub guard: KeyCode,
}

impl KeyBindings {
    /// WASD layout used by the left-hand combatant.
    pub fn left_side() -> Self {
        Self {
            jump: "w".into(),
            left: "a".into(),
            right: "d".into(),
            down: "s".into(),
            attack: "f".into(),
            guard: "g".into(),
        }
    }

    /// Arrow-key layout used by the right-hand combatant.
    pub fn right_side() -> Self {
        Self {
            jump: "up".into(),
            left: "left".into(),
            right: "right".into(),
            down: "down".into(),
            attack: "k".into(),
            guard: "l".into(),
        }
    }

    pub fn key(&self, button: Button) -> &KeyCode {
        match button {
            Button::Jump => &self.jump,
            Button::Left => &self.left,
            Button::Right => &self.right,
            Button::Down => &self.down,
            Button::Attack => &self.attack,
            Button::Guard => &self.guard,
        }
    }

    /// Reverse lookup; `None` for keys this table does not use.
    pub fn button(&self, key: &KeyCode) -> Option<Button> {
        Button::iter().find(|&button| self.key(button) == key)
    }

    /// Physical keys a player would hold to produce `set`.
    pub fn press(&self, set: InputSet) -> KeyboardState {
        set.buttons().map(|button| self.key(button).clone()).collect()
    }

    pub fn decode(&self, keys: &KeyboardState) -> InputFrame {
        InputFrame::from_keys(keys, self)
    }
}
