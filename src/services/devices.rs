use crate::media::{
    DeviceDescriptor, EngineKey, MediaBackend, MediaError, PlatformKey, Rect, Surface,
    WindowFlags,
};
use crate::models::GameConfig;
use crate::services::display::DisplayParams;
use crate::services::platform::Platform;
use regex::Regex;
use thiserror::Error;

/// Patterns for input devices known to misbehave as joysticks
pub const DEFAULT_BLACKLIST: &[&str] = &[r"Microsoft.*Transceiver.*"];

/// Fatal device bootstrap failures
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Display subsystem failed to initialize: {0}")]
    DisplayInit(#[source] MediaError),

    #[error("Failed to create a {width}x{height} display surface: {source}")]
    SetMode {
        width: u32,
        height: u32,
        #[source]
        source: MediaError,
    },
}

/// Ordered set of device-name patterns.
///
/// Patterns match from the start of the device name. The first matching pattern
/// excludes the device.
#[derive(Debug, Clone)]
pub struct Blacklist {
    patterns: Vec<Regex>,
}

impl Blacklist {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Regex::new(&format!("^(?:{})", p.as_ref())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// First pattern matching `name`, if any
    pub fn matching(&self, name: &str) -> Option<&Regex> {
        self.patterns.iter().find(|p| p.is_match(name))
    }

    pub fn is_blacklisted(&self, name: &str) -> bool {
        self.matching(name).is_some()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        // DEFAULT_BLACKLIST patterns are all valid regexes
        Self::new(DEFAULT_BLACKLIST).unwrap_or_else(|_| Self::empty())
    }
}

/// Handles produced by a successful bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandles {
    pub surface: Surface,
    pub screen_rect: Rect,
    /// Active input devices, in enumeration order
    pub devices: Vec<DeviceDescriptor>,
}

/// Window flags for the configured display mode
pub fn window_flags(config: &GameConfig) -> WindowFlags {
    let mut flags = WindowFlags::HW_SURFACE | WindowFlags::DOUBLE_BUFFER;
    if config.display.fullscreen {
        flags |= WindowFlags::FULLSCREEN;
    }
    flags
}

/// Initialize the display surface, pointer and input devices.
///
/// Expects [`Platform::init`] to have run on the same backend already.
///
/// # Errors
///
/// Only display subsystem failures abort. Device enumeration, device init and key
/// remapping failures are logged and skipped.
pub fn bootstrap<B: MediaBackend + ?Sized>(
    platform: Platform,
    config: &GameConfig,
    display: &DisplayParams,
    blacklist: &Blacklist,
    backend: &mut B,
) -> Result<DeviceHandles, BootstrapError> {
    tracing::debug!("Initializing display subsystem");
    backend.init().map_err(BootstrapError::DisplayInit)?;

    backend.set_caption(config.window_caption());

    let size = display.screen_size;
    let surface = backend
        .set_mode(size, window_flags(config))
        .map_err(|source| BootstrapError::SetMode {
            width: size.width(),
            height: size.height(),
            source,
        })?;
    let screen_rect = surface.rect();

    backend.set_pointer_visible(!config.display.hide_mouse);

    let devices = init_input_devices(blacklist, backend);

    if platform.is_restricted() {
        map_platform_keys(backend);
    }

    Ok(DeviceHandles {
        surface,
        screen_rect,
        devices,
    })
}

fn init_input_devices<B: MediaBackend + ?Sized>(
    blacklist: &Blacklist,
    backend: &mut B,
) -> Vec<DeviceDescriptor> {
    let found = match backend.enumerate_input_devices() {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!("Failed to enumerate input devices: {}", e);
            return Vec::new();
        }
    };

    let mut active = Vec::with_capacity(found.len());
    for device in found {
        tracing::info!("Found joystick: \"{}\"", device.name);

        if let Some(pattern) = blacklist.matching(&device.name) {
            tracing::info!(
                "Ignoring joystick: \"{}\" (matches {})",
                device.name,
                pattern.as_str()
            );
            continue;
        }

        tracing::info!("Configuring joystick: \"{}\"", device.name);
        match backend.init_input_device(&device) {
            Ok(()) => active.push(device),
            Err(e) => tracing::warn!("Failed to initialize joystick \"{}\": {}", device.name, e),
        }
    }

    active
}

fn map_platform_keys<B: MediaBackend + ?Sized>(backend: &mut B) {
    if let Err(e) = backend.init_platform_input() {
        tracing::warn!("Platform input init failed, skipping key remap: {}", e);
        return;
    }
    if let Err(e) = backend.map_key(PlatformKey::Menu, EngineKey::Escape) {
        tracing::warn!("Failed to map menu key to escape: {}", e);
    }
}
