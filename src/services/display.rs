//! Display and scale derivation.
//!
//! Turns the resolved configuration into the pixel sizes the rest of the engine
//! renders with. Everything here is pure, so it can be called for hypothetical
//! configurations as well as the active one.

use crate::models::{GameConfig, Resolution};
use thiserror::Error;

/// Native resolution, similar to the old handheld consoles. Used for scaling.
pub const NATIVE_RESOLUTION: Resolution = Resolution(240, 160);

/// One map tile in native pixels
pub const BASE_TILE_SIZE: (u32, u32) = (16, 16);

/// One status icon in native pixels
pub const BASE_ICON_SIZE: (u32, u32) = (7, 7);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error(
        "Resolution width {width} is smaller than the native width {native_width}; scale would be 0"
    )]
    Degenerate { width: u32, native_width: u32 },

    #[error("Native resolution width must be non-zero")]
    ZeroNativeWidth,
}

/// Display parameters derived once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParams {
    pub screen_size: Resolution,
    pub native_resolution: Resolution,
    pub tile_size: (u32, u32),
    pub icon_size: (u32, u32),
    pub scale: u32,
}

impl DisplayParams {
    /// Derive with the engine's native resolution and base sizes.
    pub fn from_config(config: &GameConfig) -> Result<Self, ScaleError> {
        derive(config, NATIVE_RESOLUTION, BASE_TILE_SIZE, BASE_ICON_SIZE)
    }
}

/// Compute the scale factor and scaled sizes.
///
/// `large_gui` forces a scale of 2. Otherwise `scaling` uses the integer ratio of the
/// configured width to the native width, and with neither set the scale is 1.
/// Tiles are multiplied by the scale; icons keep their base size.
///
/// # Errors
///
/// [`ScaleError::Degenerate`] when scaling is requested for a resolution narrower
/// than the native one, [`ScaleError::ZeroNativeWidth`] when scaling against a
/// zero-width native resolution.
pub fn derive(
    config: &GameConfig,
    native_resolution: Resolution,
    base_tile: (u32, u32),
    base_icon: (u32, u32),
) -> Result<DisplayParams, ScaleError> {
    let screen_size = config.resolution();

    let scale = if config.display.large_gui {
        2
    } else if config.display.scaling {
        if native_resolution.width() == 0 {
            return Err(ScaleError::ZeroNativeWidth);
        }
        let scale = screen_size.width() / native_resolution.width();
        if scale == 0 {
            return Err(ScaleError::Degenerate {
                width: screen_size.width(),
                native_width: native_resolution.width(),
            });
        }
        scale
    } else {
        1
    };

    Ok(DisplayParams {
        screen_size,
        native_resolution,
        tile_size: (base_tile.0 * scale, base_tile.1 * scale),
        icon_size: base_icon,
        scale,
    })
}
