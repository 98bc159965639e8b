use crate::error::{ConfigError, ConfigResult};

/// Combatant tunables in design units, with durations in frames.
///
/// Distances and speeds are scaled through [`crate::Scale`] when a combatant is
/// spawned; frame counts are used as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantConfig {
    /// Side length of the square body.
    pub body_size: i32,
    /// Distance between the spawn point and the nearer screen edge.
    pub spawn_margin: i32,
    pub walk_speed: i32,

    /// Vertical speed per jump frame. Negative is upward.
    pub jump_profile: Vec<i32>,
    pub initial_fall_speed: i32,
    /// Frames after which the fall speed stops ramping up.
    pub fall_ramp_frames: u32,

    /// Horizontal speed per dash frame, before the direction sign.
    pub dash_profile: Vec<i32>,
    /// Frames the second tap of a dash gesture may arrive within.
    pub dash_window_frames: u32,

    pub knockback_frames: u32,
    pub knockback_speed: i32,

    pub strike_windup_frames: u32,
    pub strike_active_frames: u32,
    pub strike_recovery_frames: u32,

    pub shield_frames: u32,

    /// Stun after a downstrike lands on the opponent.
    pub landing_stun_short_frames: u32,
    /// Stun after a downstrike lands on the ground.
    pub landing_stun_long_frames: u32,

    pub invincibility_frames: u32,

    pub max_stamina: u32,
    pub start_stamina: u32,
    pub stamina_reload_frames: u32,

    pub life: u32,

    pub sword: Attachment,
    pub downstrike_blade: Attachment,
    pub shield: Attachment,
}

/// A rectangle carried alongside the body.
///
/// Offsets are relative to the body's top-left corner. `offset_x_left` is used
/// when the combatant faces left, `offset_x_right` when it faces right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    pub width: i32,
    pub height: i32,
    pub offset_x_right: i32,
    pub offset_x_left: i32,
    pub offset_y: i32,
}

impl Attachment {
    pub const fn new(
        width: i32,
        height: i32,
        offset_x_right: i32,
        offset_x_left: i32,
        offset_y: i32,
    ) -> Self {
        Self {
            width,
            height,
            offset_x_right,
            offset_x_left,
            offset_y,
        }
    }
}

impl CombatantConfig {
    pub const DEFAULT_BODY_SIZE: i32 = 50;
    pub const DEFAULT_SPAWN_MARGIN: i32 = 100;
    pub const DEFAULT_WALK_SPEED: i32 = 8;
    pub const DEFAULT_JUMP_PROFILE: [i32; 15] =
        [0, 0, -20, -50, -50, -30, -15, -5, -5, -2, -2, 0, 0, 0, 0];
    pub const DEFAULT_INITIAL_FALL_SPEED: i32 = 3;
    pub const DEFAULT_FALL_RAMP_FRAMES: u32 = 10;
    pub const DEFAULT_DASH_PROFILE: [i32; 7] = [0, 30, 30, 30, 30, 30, 30];
    pub const DEFAULT_DASH_WINDOW_FRAMES: u32 = 12;
    pub const DEFAULT_KNOCKBACK_FRAMES: u32 = 15;
    pub const DEFAULT_KNOCKBACK_SPEED: i32 = 15;
    pub const DEFAULT_STRIKE_WINDUP_FRAMES: u32 = 2;
    pub const DEFAULT_STRIKE_ACTIVE_FRAMES: u32 = 12;
    pub const DEFAULT_STRIKE_RECOVERY_FRAMES: u32 = 10;
    pub const DEFAULT_SHIELD_FRAMES: u32 = 29;
    pub const DEFAULT_LANDING_STUN_SHORT_FRAMES: u32 = 5;
    pub const DEFAULT_LANDING_STUN_LONG_FRAMES: u32 = 30;
    pub const DEFAULT_INVINCIBILITY_FRAMES: u32 = 60;
    pub const DEFAULT_MAX_STAMINA: u32 = 5;
    pub const DEFAULT_STAMINA_RELOAD_FRAMES: u32 = 48;
    pub const DEFAULT_LIFE: u32 = 5;

    pub const DEFAULT_SWORD: Attachment = Attachment::new(75, 30, 50, -75, 10);
    pub const DEFAULT_DOWNSTRIKE_BLADE: Attachment = Attachment::new(30, 75, 10, 10, 30);
    pub const DEFAULT_SHIELD: Attachment = Attachment::new(5, 50, 50, -5, 0);

    pub fn new() -> Self {
        Self {
            body_size: Self::DEFAULT_BODY_SIZE,
            spawn_margin: Self::DEFAULT_SPAWN_MARGIN,
            walk_speed: Self::DEFAULT_WALK_SPEED,
            jump_profile: Self::DEFAULT_JUMP_PROFILE.to_vec(),
            initial_fall_speed: Self::DEFAULT_INITIAL_FALL_SPEED,
            fall_ramp_frames: Self::DEFAULT_FALL_RAMP_FRAMES,
            dash_profile: Self::DEFAULT_DASH_PROFILE.to_vec(),
            dash_window_frames: Self::DEFAULT_DASH_WINDOW_FRAMES,
            knockback_frames: Self::DEFAULT_KNOCKBACK_FRAMES,
            knockback_speed: Self::DEFAULT_KNOCKBACK_SPEED,
            strike_windup_frames: Self::DEFAULT_STRIKE_WINDUP_FRAMES,
            strike_active_frames: Self::DEFAULT_STRIKE_ACTIVE_FRAMES,
            strike_recovery_frames: Self::DEFAULT_STRIKE_RECOVERY_FRAMES,
            shield_frames: Self::DEFAULT_SHIELD_FRAMES,
            landing_stun_short_frames: Self::DEFAULT_LANDING_STUN_SHORT_FRAMES,
            landing_stun_long_frames: Self::DEFAULT_LANDING_STUN_LONG_FRAMES,
            invincibility_frames: Self::DEFAULT_INVINCIBILITY_FRAMES,
            max_stamina: Self::DEFAULT_MAX_STAMINA,
            start_stamina: Self::DEFAULT_MAX_STAMINA,
            stamina_reload_frames: Self::DEFAULT_STAMINA_RELOAD_FRAMES,
            life: Self::DEFAULT_LIFE,
            sword: Self::DEFAULT_SWORD,
            downstrike_blade: Self::DEFAULT_DOWNSTRIKE_BLADE,
            shield: Self::DEFAULT_SHIELD,
        }
    }

    /// Total length of a strike, all phases included.
    pub fn strike_total_frames(&self) -> u32 {
        self.strike_windup_frames + self.strike_active_frames + self.strike_recovery_frames
    }

    /// Rejects tunables the state machine cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.body_size <= 0 {
            return Err(ConfigError::ZeroDuration { name: "body_size" });
        }
        if self.jump_profile.is_empty() {
            return Err(ConfigError::EmptyProfile { name: "jump" });
        }
        if self.dash_profile.is_empty() {
            return Err(ConfigError::EmptyProfile { name: "dash" });
        }

        let durations = [
            ("fall_ramp_frames", self.fall_ramp_frames),
            ("dash_window_frames", self.dash_window_frames),
            ("knockback_frames", self.knockback_frames),
            ("strike_active_frames", self.strike_active_frames),
            ("shield_frames", self.shield_frames),
            ("landing_stun_short_frames", self.landing_stun_short_frames),
            ("landing_stun_long_frames", self.landing_stun_long_frames),
            ("invincibility_frames", self.invincibility_frames),
            ("stamina_reload_frames", self.stamina_reload_frames),
            ("max_stamina", self.max_stamina),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, frames)| *frames == 0) {
            return Err(ConfigError::ZeroDuration { name: *name });
        }

        if self.start_stamina > self.max_stamina {
            return Err(ConfigError::StaminaOutOfRange {
                start: self.start_stamina,
                max: self.max_stamina,
            });
        }
        Ok(())
    }
}

impl Default for CombatantConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = CombatantConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.strike_total_frames(), 24);
        assert_eq!(config.jump_profile.len(), 15);
    }

    #[test]
    fn rejects_empty_profiles_and_zero_durations() {
        let mut config = CombatantConfig {
            dash_profile: Vec::new(),
            ..CombatantConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyProfile { name: "dash" })
        );

        config.dash_profile = vec![10];
        config.shield_frames = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration {
                name: "shield_frames"
            })
        );
    }

    #[test]
    fn rejects_start_stamina_above_max() {
        let config = CombatantConfig {
            start_stamina: 6,
            ..CombatantConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StaminaOutOfRange { start: 6, max: 5 })
        ));
    }
}
