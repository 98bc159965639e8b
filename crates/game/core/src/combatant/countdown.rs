use core::num::NonZeroU32;

/// Frame countdown that is never stored at zero.
///
/// [`tick`](Self::tick) consumes one frame and returns `None` on the frame
/// the countdown runs out, so the owner must transition right there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown(NonZeroU32);

impl Countdown {
    /// Starts a countdown of `frames` frames.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is zero. Tunables are validated before any
    /// countdown is started, so a zero here is a contract violation.
    pub fn start(frames: u32) -> Self {
        match NonZeroU32::new(frames) {
            Some(frames) => Self(frames),
            None => panic!("countdown started with zero frames"),
        }
    }

    #[inline]
    pub fn remaining(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    pub fn tick(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_out_after_exactly_n_ticks() {
        let mut countdown = Some(Countdown::start(3));
        let mut ticks = 0;
        while let Some(current) = countdown {
            countdown = current.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }

    #[test]
    #[should_panic(expected = "zero frames")]
    fn zero_length_is_rejected() {
        let _ = Countdown::start(0);
    }
}
