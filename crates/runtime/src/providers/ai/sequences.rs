//! Named input sequences the AI controllers play back frame by frame.
//!
//! A sequence is a list of logical inputs, one per frame. Sequences are
//! built once from a [`SequenceShape`] and cloned into the decision context
//! whenever one is selected.

use duel_content::SequenceShape;
use duel_core::{Direction, InputSet};
use strum::{EnumCount, IntoEnumIterator};

/// Every sequence an AI controller knows.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum SequenceKind {
    /// A single empty frame.
    Hold,
    WalkLeft,
    WalkRight,
    /// Two walks back to back.
    DoubleWalkLeft,
    DoubleWalkRight,
    /// Three walks, used to leave a corner.
    FleeLeft,
    FleeRight,
    /// Double-tap gesture, then a strike once the dash is under way.
    DashLeft,
    DashRight,
    /// Jump with direction held, carried by one walk.
    JumpLeft,
    JumpRight,
    /// Directional jump, more walking, then down.
    JumpLeftDownstrike,
    JumpRightDownstrike,
    /// Straight jump, then down.
    Downstrike,
    /// Direction and attack in the same frame.
    StepStrikeLeft,
    StepStrikeRight,
    /// A walk followed by a strike.
    WalkStrikeLeft,
    WalkStrikeRight,
    Strike,
    Guard,
}

impl SequenceKind {
    pub const fn walk(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::WalkLeft,
            Direction::Right => Self::WalkRight,
        }
    }

    pub const fn double_walk(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::DoubleWalkLeft,
            Direction::Right => Self::DoubleWalkRight,
        }
    }

    pub const fn flee(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::FleeLeft,
            Direction::Right => Self::FleeRight,
        }
    }

    pub const fn dash(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::DashLeft,
            Direction::Right => Self::DashRight,
        }
    }

    pub const fn jump(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::JumpLeft,
            Direction::Right => Self::JumpRight,
        }
    }

    pub const fn jump_downstrike(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::JumpLeftDownstrike,
            Direction::Right => Self::JumpRightDownstrike,
        }
    }

    pub const fn step_strike(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::StepStrikeLeft,
            Direction::Right => Self::StepStrikeRight,
        }
    }

    pub const fn walk_strike(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::WalkStrikeLeft,
            Direction::Right => Self::WalkStrikeRight,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Pool the random-sequence controller draws from. Strikes and guards are
/// listed three times each so they come up more often than movement.
pub const RANDOM_SEQUENCE_POOL: [SequenceKind; 13] = [
    SequenceKind::WalkLeft,
    SequenceKind::WalkRight,
    SequenceKind::DashLeft,
    SequenceKind::DashRight,
    SequenceKind::Strike,
    SequenceKind::Strike,
    SequenceKind::Strike,
    SequenceKind::Guard,
    SequenceKind::Guard,
    SequenceKind::Guard,
    SequenceKind::JumpLeftDownstrike,
    SequenceKind::JumpRightDownstrike,
    SequenceKind::Downstrike,
];

/// One named sequence, ready for playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSequence {
    kind: SequenceKind,
    frames: Vec<InputSet>,
}

impl InputSequence {
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn frames(&self) -> &[InputSet] {
        &self.frames
    }

    /// Never zero; empty shapes collapse to a single empty frame.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<InputSet> {
        self.frames.get(index).copied()
    }
}

/// All sequences for one controller, built from a shape.
#[derive(Clone, Debug)]
pub struct SequenceLibrary {
    sequences: Vec<InputSequence>,
}

impl SequenceLibrary {
    pub fn new(shape: &SequenceShape) -> Self {
        let sequences = SequenceKind::iter()
            .map(|kind| InputSequence {
                kind,
                frames: non_empty(build(kind, shape)),
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(sequences.len(), SequenceKind::COUNT);
        Self { sequences }
    }

    pub fn get(&self, kind: SequenceKind) -> &InputSequence {
        // Built from `SequenceKind::iter`, so the discriminant is the index.
        &self.sequences[kind as usize]
    }
}

impl Default for SequenceLibrary {
    fn default() -> Self {
        Self::new(&SequenceShape::default())
    }
}

fn non_empty(frames: Vec<InputSet>) -> Vec<InputSet> {
    if frames.is_empty() {
        vec![InputSet::empty()]
    } else {
        frames
    }
}

fn repeat(set: InputSet, frames: u32) -> impl Iterator<Item = InputSet> {
    std::iter::repeat_n(set, frames as usize)
}

fn walk(direction: Direction, shape: &SequenceShape) -> Vec<InputSet> {
    repeat(InputSet::walk(direction), shape.walk_frames).collect()
}

fn walks(direction: Direction, count: u32, shape: &SequenceShape) -> Vec<InputSet> {
    (0..count).flat_map(|_| walk(direction, shape)).collect()
}

fn dash(direction: Direction, shape: &SequenceShape) -> Vec<InputSet> {
    let held = InputSet::walk(direction);
    repeat(held, shape.dash_press_frames)
        .chain(repeat(InputSet::empty(), shape.dash_release_frames))
        .chain(repeat(held, shape.dash_hold_frames))
        .chain(std::iter::once(InputSet::ATTACK))
        .collect()
}

fn jump(direction: Direction, shape: &SequenceShape) -> Vec<InputSet> {
    std::iter::once(InputSet::JUMP | InputSet::walk(direction))
        .chain(walk(direction, shape))
        .collect()
}

fn jump_downstrike(direction: Direction, shape: &SequenceShape) -> Vec<InputSet> {
    let mut frames = jump(direction, shape);
    frames.extend(walks(direction, shape.jump_carry_walks, shape));
    frames.push(InputSet::DOWN);
    frames
}

fn build(kind: SequenceKind, shape: &SequenceShape) -> Vec<InputSet> {
    use Direction::{Left, Right};
    use SequenceKind as K;

    match kind {
        K::Hold => vec![InputSet::empty()],
        K::WalkLeft => walk(Left, shape),
        K::WalkRight => walk(Right, shape),
        K::DoubleWalkLeft => walks(Left, shape.double_walks, shape),
        K::DoubleWalkRight => walks(Right, shape.double_walks, shape),
        K::FleeLeft => walks(Left, shape.flee_walks, shape),
        K::FleeRight => walks(Right, shape.flee_walks, shape),
        K::DashLeft => dash(Left, shape),
        K::DashRight => dash(Right, shape),
        K::JumpLeft => jump(Left, shape),
        K::JumpRight => jump(Right, shape),
        K::JumpLeftDownstrike => jump_downstrike(Left, shape),
        K::JumpRightDownstrike => jump_downstrike(Right, shape),
        K::Downstrike => repeat(InputSet::JUMP, shape.downstrike_lead_in)
            .chain(std::iter::once(InputSet::DOWN))
            .collect(),
        K::StepStrikeLeft => vec![InputSet::LEFT | InputSet::ATTACK],
        K::StepStrikeRight => vec![InputSet::RIGHT | InputSet::ATTACK],
        K::WalkStrikeLeft => {
            let mut frames = walk(Left, shape);
            frames.push(InputSet::ATTACK);
            frames
        }
        K::WalkStrikeRight => {
            let mut frames = walk(Right, shape);
            frames.push(InputSet::ATTACK);
            frames
        }
        K::Strike => vec![InputSet::ATTACK],
        K::Guard => vec![InputSet::GUARD],
    }
}
