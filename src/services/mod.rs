//! Services module - the stages of the startup pipeline.
//!
//! # Components
//!
//! - [`Platform`]: Restricted (handheld) or standard (desktop) capability, selected once.
//!   Applies pre-init audio parameters and resolves the user config directory.
//!
//! - [`display`]: Pure derivation of the scale factor, tile size and icon size from the
//!   configuration and the native resolution.
//!
//! - [`devices`]: Brings up the display surface, pointer visibility and input devices,
//!   filtering devices through a [`Blacklist`].
//!
//! - [`ResourceLocator`]: Resolves asset paths, preferring the active data pack's mod
//!   directory over the base resources.
//!
//! None of these hold global state. The caller threads a
//! [`StartupContext`](crate::context::StartupContext) through them.

pub mod devices;
pub mod display;
pub mod platform;
pub mod resources;

pub use devices::{Blacklist, BootstrapError, DeviceHandles};
pub use display::{DisplayParams, ScaleError};
pub use platform::{Platform, PlatformError};
pub use resources::ResourceLocator;
