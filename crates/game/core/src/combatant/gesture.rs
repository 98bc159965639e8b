use crate::geometry::Direction;

/// Double-tap detector for the dash gesture.
///
/// A dash is a press, a release, and a second press of the same direction
/// while the window opened by the first press is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DashGesture {
    #[default]
    Idle,
    /// First press seen and still held.
    Armed { direction: Direction, window: u32 },
    /// First press released; waiting for the second press.
    Released { direction: Direction, window: u32 },
}

impl DashGesture {
    /// Feeds this frame's horizontal press. Returns the dash direction when
    /// the gesture completes.
    pub fn observe(&mut self, press: Option<Direction>, window_frames: u32) -> Option<Direction> {
        match (*self, press) {
            (Self::Idle, Some(direction)) => {
                *self = Self::Armed {
                    direction,
                    window: window_frames,
                };
                None
            }
            (Self::Armed { direction, window }, None) => {
                *self = Self::Released { direction, window };
                None
            }
            (Self::Released { direction, window }, Some(second)) => {
                *self = Self::Idle;
                (second == direction && window > 0).then_some(direction)
            }
            _ => None,
        }
    }

    /// Consumes one frame of the window; an expired window resets the
    /// detector.
    pub fn tick(&mut self) {
        match self {
            Self::Idle => {}
            Self::Armed { window, .. } | Self::Released { window, .. } => {
                *window = window.saturating_sub(1);
                if *window == 0 {
                    *self = Self::Idle;
                }
            }
        }
    }
}
