//! Integer geometry shared by the combatant, the referee and the renderer.
//!
//! Screen conventions apply: `x` grows to the right, `y` grows downward, so a
//! smaller `bottom()` means higher in the arena.

use core::fmt;

/// Horizontal direction, used both for movement and for fixed facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to horizontal speeds: -1 for left, +1 for right.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Per-frame position delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Axis-aligned rectangle in runtime units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal centre, rounded toward the left edge.
    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Vertical centre, rounded toward the top edge.
    #[inline]
    pub const fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    pub fn translate(&mut self, velocity: Velocity) {
        self.x += velocity.dx;
        self.y += velocity.dy;
    }

    /// Returns a copy moved by the given offset.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True when the horizontal spans overlap, ignoring height.
    pub const fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}
