//! Construction-time error types for duel-core.
//!
//! Frame stepping itself never fails: gated commands are silent no-ops and
//! broken invariants are assertions. The only recoverable failures live at the
//! boundary where tunables and arena settings are accepted.

/// Rejected tunables or arena settings.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} profile must contain at least one frame")]
    EmptyProfile { name: &'static str },

    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },

    #[error("arena {width}x{height} is too small for a {body}x{body} combatant")]
    ArenaTooSmall { width: i32, height: i32, body: i32 },

    #[error("scale factor must be a positive finite number, got {0}")]
    InvalidScale(f32),

    #[error("max stamina {max} is below starting stamina {start}")]
    StaminaOutOfRange { start: u32, max: u32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
