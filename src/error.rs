use crate::config::ConfigError;
use crate::services::{BootstrapError, PlatformError, ScaleError};
use thiserror::Error;

/// Fatal startup errors.
///
/// Any of these aborts the startup sequence. Recoverable problems (a blacklisted or
/// broken input device, a missing asset) never surface here.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}
