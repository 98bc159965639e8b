/// Regenerating resource that gates dash, strike, downstrike and shield.
///
/// One point is spent per action. While below `max`, a point comes back
/// every `reload_frames` frames without spending; spending restarts the
/// reload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stamina {
    current: u32,
    max: u32,
    reload: u32,
    reload_frames: u32,
}

impl Stamina {
    pub fn new(current: u32, max: u32, reload_frames: u32) -> Self {
        assert!(current <= max, "stamina {current} above max {max}");
        assert!(reload_frames > 0, "stamina reload must be at least one frame");
        Self {
            current,
            max,
            reload: reload_frames,
            reload_frames,
        }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Frames left until the next point regenerates.
    #[inline]
    pub fn reload(&self) -> u32 {
        self.reload
    }

    #[inline]
    pub fn has_any(&self) -> bool {
        self.current > 0
    }

    /// Spends one point. Returns `false` and changes nothing when empty.
    pub fn try_consume(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.reload = self.reload_frames;
        true
    }

    /// Advances the reload timer by one frame unless `suspended`.
    pub fn regenerate(&mut self, suspended: bool) {
        if suspended || self.current >= self.max {
            return;
        }
        self.reload -= 1;
        if self.reload == 0 {
            self.current += 1;
            self.reload = self.reload_frames;
        }
        debug_assert!(self.current <= self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_stops_at_zero() {
        let mut stamina = Stamina::new(1, 5, 48);
        assert!(stamina.try_consume());
        assert!(!stamina.try_consume());
        assert_eq!(stamina.current(), 0);
    }

    #[test]
    fn regenerates_one_point_per_interval() {
        let mut stamina = Stamina::new(3, 5, 4);
        for _ in 0..3 {
            stamina.regenerate(false);
        }
        assert_eq!(stamina.current(), 3);
        stamina.regenerate(false);
        assert_eq!(stamina.current(), 4);
        assert_eq!(stamina.reload(), 4);
    }

    #[test]
    fn suspended_and_full_meters_do_not_tick() {
        let mut stamina = Stamina::new(2, 5, 4);
        for _ in 0..10 {
            stamina.regenerate(true);
        }
        assert_eq!(stamina.current(), 2);
        assert_eq!(stamina.reload(), 4);

        let mut full = Stamina::new(5, 5, 4);
        for _ in 0..10 {
            full.regenerate(false);
        }
        assert_eq!(full.current(), 5);
    }

    #[test]
    fn spending_restarts_reload() {
        let mut stamina = Stamina::new(4, 5, 4);
        stamina.regenerate(false);
        stamina.regenerate(false);
        assert!(stamina.try_consume());
        assert_eq!(stamina.reload(), 4);
    }
}
