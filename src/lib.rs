// Tuxemon startup - configuration and platform-resolution pipeline
//
// This is the library crate containing the startup pipeline and its data structures.
// The binary crate (main.rs) runs the pipeline against the headless backend.

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod media;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigManager, UserPaths};
pub use context::{Session, StartupContext, bootstrap};
pub use error::StartupError;
pub use models::{GameConfig, Resolution, SaveMethod, SaveSlots};
pub use services::{Blacklist, DisplayParams, Platform, ResourceLocator};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
