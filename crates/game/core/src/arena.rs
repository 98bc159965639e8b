//! Arena bounds and the design-unit scaling function.
//!
//! Every distance in the tunables (speeds, profiles, AI thresholds) is written
//! in design units for a reference screen. [`Scale`] maps them to runtime
//! units once, at construction, so the frame loop only does integer math.

use crate::error::{ConfigError, ConfigResult};

/// Maps design units to runtime units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    factor: f32,
}

impl Scale {
    pub const IDENTITY: Self = Self { factor: 1.0 };

    pub fn new(factor: f32) -> ConfigResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::InvalidScale(factor));
        }
        Ok(Self { factor })
    }

    #[inline]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Scales a single design-unit value, rounding to the nearest unit.
    #[inline]
    pub fn apply(&self, value: i32) -> i32 {
        (value as f32 * self.factor).round() as i32
    }

    /// Scales every entry of a per-frame profile.
    pub fn apply_all(&self, values: &[i32]) -> Vec<i32> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Arena settings as written in content files.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Screen width in runtime units.
    pub width: i32,
    /// Screen height in runtime units.
    pub height: i32,
    /// Design-to-runtime scale factor.
    pub scale: f32,
    /// Fraction of the screen height where the ground line sits.
    pub ground_ratio: f32,
    /// Simulation frames per second. Only the frame pacer uses this; all
    /// durations in the tunables are expressed in frames at this rate.
    pub fps: u32,
}

impl ArenaConfig {
    pub const DEFAULT_WIDTH: i32 = 1280;
    pub const DEFAULT_HEIGHT: i32 = 720;
    pub const DEFAULT_GROUND_RATIO: f32 = 0.78;
    pub const DEFAULT_FPS: u32 = 120;
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            scale: 1.0,
            ground_ratio: Self::DEFAULT_GROUND_RATIO,
            fps: Self::DEFAULT_FPS,
        }
    }
}

/// Read-only arena collaborator shared by both combatants and the AI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    width: i32,
    height: i32,
    ground: i32,
    scale: Scale,
}

impl Arena {
    pub fn new(width: i32, height: i32, scale: Scale) -> ConfigResult<Self> {
        Self::with_ground_ratio(width, height, scale, ArenaConfig::DEFAULT_GROUND_RATIO)
    }

    pub fn with_ground_ratio(
        width: i32,
        height: i32,
        scale: Scale,
        ground_ratio: f32,
    ) -> ConfigResult<Self> {
        if width <= 0 || height <= 0 || !(0.0..=1.0).contains(&ground_ratio) {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                body: 0,
            });
        }
        Ok(Self {
            width,
            height,
            ground: (height as f32 * ground_ratio).round() as i32,
            scale,
        })
    }

    pub fn from_config(config: &ArenaConfig) -> ConfigResult<Self> {
        Self::with_ground_ratio(
            config.width,
            config.height,
            Scale::new(config.scale)?,
            config.ground_ratio,
        )
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Y coordinate of the ground line; a body rests with `bottom() == ground`.
    #[inline]
    pub fn ground(&self) -> i32 {
        self.ground
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ArenaConfig::DEFAULT_WIDTH,
            height: ArenaConfig::DEFAULT_HEIGHT,
            ground: (ArenaConfig::DEFAULT_HEIGHT as f32 * ArenaConfig::DEFAULT_GROUND_RATIO)
                .round() as i32,
            scale: Scale::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_sits_at_ratio_of_height() {
        let arena = Arena::new(1280, 720, Scale::IDENTITY).unwrap();
        assert_eq!(arena.ground(), 562);
        assert_eq!(Arena::default(), arena);
    }

    #[test]
    fn scale_rounds_to_nearest_unit() {
        let scale = Scale::new(1.5).unwrap();
        assert_eq!(scale.apply(3), 5);
        assert_eq!(scale.apply(-20), -30);
        assert_eq!(scale.apply_all(&[0, 2, -2]), vec![0, 3, -3]);
    }

    #[test]
    fn rejects_degenerate_settings() {
        assert!(matches!(Scale::new(0.0), Err(ConfigError::InvalidScale(_))));
        assert!(Scale::new(f32::NAN).is_err());
        assert!(Arena::new(0, 720, Scale::IDENTITY).is_err());
    }
}
