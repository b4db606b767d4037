//! Data models for the startup pipeline.
//!
//! - [`GameConfig`]: The configuration record loaded from `tuxemon.yaml`, split into
//!   [`DisplaySettings`] and [`GameSettings`] sections
//! - [`Resolution`]: Window size in pixels
//! - [`SaveSlots`]: Addressing for save files under the user save directory
//!
//! All config structs derive `Serialize`/`Deserialize` for YAML persistence and are
//! treated as immutable once the pipeline has produced them.

pub mod config;
pub mod save;

pub use config::{DisplaySettings, GameConfig, GameSettings, Resolution};
pub use save::{SaveMethod, SaveSlots};
