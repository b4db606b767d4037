//! Platform capability selection.
//!
//! The engine runs either on a restricted platform (Android handhelds), which
//! manages its own audio and input setup, or on a standard desktop. The choice is
//! made once with [`Platform::detect`] and stored in the startup context.

use crate::media::{AudioSpec, MediaBackend, MediaError};
use camino::Utf8PathBuf;
use std::path::PathBuf;
use thiserror::Error;

/// Storage root used on restricted platforms
pub const RESTRICTED_CONFIG_DIR: &str = "/sdcard/org.tuxemon";

/// Directory under the user's home used on desktop platforms
pub const STANDARD_CONFIG_DIR_NAME: &str = ".tuxemon";

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Could not determine the user's home directory")]
    NoHomeDirectory,

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Audio pre-initialization failed: {0}")]
    AudioPreInit(#[source] MediaError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Handheld/embedded runtime with its own audio and input initialization
    Restricted,
    /// Desktop runtime
    Standard,
}

impl Platform {
    /// Probe for the restricted-platform capability.
    pub fn detect() -> Self {
        let platform = if cfg!(target_os = "android") {
            Platform::Restricted
        } else {
            Platform::Standard
        };
        tracing::debug!("Selected platform backend: {:?}", platform);
        platform
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Platform::Restricted)
    }

    /// Platform-specific setup that must run before the backend's own `init()`.
    ///
    /// On the standard platform this applies the low-latency audio parameters; the
    /// mixer ignores them once it has been initialized. The restricted platform
    /// initializes audio itself, so nothing is done there.
    pub fn init<B: MediaBackend + ?Sized>(&self, backend: &mut B) -> Result<(), PlatformError> {
        match self {
            Platform::Standard => {
                tracing::debug!("Pre-initializing audio mixer");
                backend
                    .pre_init_audio(AudioSpec::LOW_LATENCY)
                    .map_err(PlatformError::AudioPreInit)
            }
            Platform::Restricted => Ok(()),
        }
    }

    /// Root directory for user config, data and saves.
    pub fn config_directory(&self) -> Result<Utf8PathBuf, PlatformError> {
        match self {
            Platform::Restricted => Ok(Utf8PathBuf::from(RESTRICTED_CONFIG_DIR)),
            Platform::Standard => {
                let dirs = directories::BaseDirs::new().ok_or(PlatformError::NoHomeDirectory)?;
                let dir = dirs.home_dir().join(STANDARD_CONFIG_DIR_NAME);
                Utf8PathBuf::try_from(dir).map_err(|e| PlatformError::NonUtf8Path(e.into_path_buf()))
            }
        }
    }
}
