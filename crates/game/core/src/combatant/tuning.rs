use super::action::StrikeTiming;
use crate::arena::Scale;
use crate::config::{Attachment, CombatantConfig};

/// [`CombatantConfig`] resolved into runtime units for one arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tuning {
    pub walk_speed: i32,
    pub jump_profile: Vec<i32>,
    pub fall_speed: i32,
    pub fall_ramp: u32,
    pub dash_profile: Vec<i32>,
    pub dash_window: u32,
    pub knockback_frames: u32,
    pub knockback_speed: i32,
    pub strike: StrikeTiming,
    pub shield_frames: u32,
    pub stun_short: u32,
    pub stun_long: u32,
    pub invincibility_frames: u32,
    pub max_life: u32,
    pub sword: Attachment,
    pub downstrike_blade: Attachment,
    pub shield: Attachment,
}

impl Tuning {
    pub fn scaled(config: &CombatantConfig, scale: Scale) -> Self {
        let attachment = |a: Attachment| Attachment {
            width: scale.apply(a.width),
            height: scale.apply(a.height),
            offset_x_right: scale.apply(a.offset_x_right),
            offset_x_left: scale.apply(a.offset_x_left),
            offset_y: scale.apply(a.offset_y),
        };

        Self {
            walk_speed: scale.apply(config.walk_speed),
            jump_profile: scale.apply_all(&config.jump_profile),
            fall_speed: scale.apply(config.initial_fall_speed),
            fall_ramp: config.fall_ramp_frames,
            dash_profile: scale.apply_all(&config.dash_profile),
            dash_window: config.dash_window_frames,
            knockback_frames: config.knockback_frames,
            knockback_speed: scale.apply(config.knockback_speed),
            strike: StrikeTiming {
                windup: config.strike_windup_frames,
                active: config.strike_active_frames,
                recovery: config.strike_recovery_frames,
            },
            shield_frames: config.shield_frames,
            stun_short: config.landing_stun_short_frames,
            stun_long: config.landing_stun_long_frames,
            invincibility_frames: config.invincibility_frames,
            max_life: config.life,
            sword: attachment(config.sword),
            downstrike_blade: attachment(config.downstrike_blade),
            shield: attachment(config.shield),
        }
    }
}
