//! Seam between the startup pipeline and the multimedia library.
//!
//! The pipeline never talks to a windowing, audio or joystick API directly. It drives
//! a [`MediaBackend`], which initializes the library with a set of flags and hands back
//! opaque handles. [`HeadlessBackend`] is the in-process implementation used by the
//! binary and by the integration tests.

pub mod headless;

pub use headless::{BackendCall, HeadlessBackend};

use crate::models::Resolution;
use thiserror::Error;

/// Errors reported by a media backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Input device {0:?} is unavailable")]
    DeviceUnavailable(DeviceHandle),
}

bitflags::bitflags! {
    /// Flags requested when creating the display surface
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const HW_SURFACE = 0b0000_0001;
        const DOUBLE_BUFFER = 0b0000_0010;
        const FULLSCREEN = 0b0000_0100;
    }
}

/// Audio parameters applied before the backend initializes its mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    /// Sample rate in Hz
    pub frequency: u32,
    /// Sample format; negative means signed samples of that many bits
    pub format: i16,
    pub channels: u8,
    /// Mixer buffer length in samples
    pub buffer: u16,
}

impl AudioSpec {
    /// Low-latency settings used on desktop platforms
    pub const LOW_LATENCY: AudioSpec = AudioSpec {
        frequency: 44_100,
        format: -16,
        channels: 2,
        buffer: 1024,
    };
}

/// Opaque handle to an input device, valid for the backend that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceHandle(pub u32);

/// An input device reported by enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub name: String,
    pub handle: DeviceHandle,
}

impl DeviceDescriptor {
    pub fn new(name: impl Into<String>, handle: DeviceHandle) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }
}

/// Rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The display surface returned by [`MediaBackend::set_mode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub size: Resolution,
    pub flags: WindowFlags,
}

impl Surface {
    pub fn rect(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.size.width(),
            height: self.size.height(),
        }
    }
}

/// Hardware key reported by a restricted platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKey {
    Menu,
}

/// Key as understood by the engine's input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKey {
    Escape,
}

/// Operations the startup pipeline needs from the multimedia library.
///
/// Call order matters: [`pre_init_audio`](Self::pre_init_audio) only has an effect
/// when it runs before [`init`](Self::init).
#[cfg_attr(test, mockall::automock)]
pub trait MediaBackend {
    fn pre_init_audio(&mut self, spec: AudioSpec) -> Result<(), MediaError>;

    fn init(&mut self) -> Result<(), MediaError>;

    fn set_caption(&mut self, caption: &str);

    fn set_mode(&mut self, size: Resolution, flags: WindowFlags) -> Result<Surface, MediaError>;

    fn set_pointer_visible(&mut self, visible: bool);

    fn enumerate_input_devices(&mut self) -> Result<Vec<DeviceDescriptor>, MediaError>;

    fn init_input_device(&mut self, device: &DeviceDescriptor) -> Result<(), MediaError>;

    /// Restricted-platform input setup that must precede key remapping
    fn init_platform_input(&mut self) -> Result<(), MediaError>;

    fn map_key(&mut self, from: PlatformKey, to: EngineKey) -> Result<(), MediaError>;
}
