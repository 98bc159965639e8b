//! Unified error types surfaced by the runtime API.
//!
//! Stepping a duel never fails; everything here is raised while a duel is
//! being assembled.
use duel_content::ControllerKind;
use duel_core::{ConfigError, Side};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} input provider not set")]
    ProviderNotSet { side: Side },

    #[error("{side} controller `{kind}` is driven by the frontend and cannot be built here")]
    ExternalController { side: Side, kind: ControllerKind },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
