//! Headless media backend.
//!
//! Performs no OS calls. Every call is appended to [`HeadlessBackend::calls`] so
//! callers can inspect exactly what the pipeline asked for and in what order. Input
//! devices are supplied up front, and individual failures can be injected to exercise
//! error paths.

use std::collections::HashSet;

use super::{
    AudioSpec, DeviceDescriptor, DeviceHandle, EngineKey, MediaBackend, MediaError, PlatformKey,
    Surface, WindowFlags,
};
use crate::models::Resolution;

/// A single recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    PreInitAudio(AudioSpec),
    Init,
    SetCaption(String),
    SetMode(Resolution, WindowFlags),
    SetPointerVisible(bool),
    EnumerateInputDevices,
    InitInputDevice(DeviceHandle),
    InitPlatformInput,
    MapKey(PlatformKey, EngineKey),
}

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    /// Calls received so far, oldest first
    pub calls: Vec<BackendCall>,
    devices: Vec<DeviceDescriptor>,
    failing_devices: HashSet<DeviceHandle>,
    fail_init: bool,
    fail_enumeration: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the given device names from enumeration, with handles in list order.
    pub fn with_devices<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.devices = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| DeviceDescriptor::new(name, DeviceHandle(i as u32)))
            .collect();
        self
    }

    /// Make initialization of the device with this handle fail.
    pub fn with_failing_device(mut self, handle: DeviceHandle) -> Self {
        self.failing_devices.insert(handle);
        self
    }

    /// Make the display subsystem initialization fail.
    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Make device enumeration fail.
    pub fn with_failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    /// Position of the first recorded call equal to `call`
    pub fn position_of(&self, call: &BackendCall) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    /// Handles passed to `init_input_device`, in call order
    pub fn initialized_devices(&self) -> Vec<DeviceHandle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                BackendCall::InitInputDevice(handle) => Some(*handle),
                _ => None,
            })
            .collect()
    }
}

impl MediaBackend for HeadlessBackend {
    fn pre_init_audio(&mut self, spec: AudioSpec) -> Result<(), MediaError> {
        self.calls.push(BackendCall::PreInitAudio(spec));
        Ok(())
    }

    fn init(&mut self) -> Result<(), MediaError> {
        self.calls.push(BackendCall::Init);
        if self.fail_init {
            return Err(MediaError::Backend("no video device available".into()));
        }
        Ok(())
    }

    fn set_caption(&mut self, caption: &str) {
        self.calls.push(BackendCall::SetCaption(caption.to_string()));
    }

    fn set_mode(&mut self, size: Resolution, flags: WindowFlags) -> Result<Surface, MediaError> {
        self.calls.push(BackendCall::SetMode(size, flags));
        Ok(Surface { size, flags })
    }

    fn set_pointer_visible(&mut self, visible: bool) {
        self.calls.push(BackendCall::SetPointerVisible(visible));
    }

    fn enumerate_input_devices(&mut self) -> Result<Vec<DeviceDescriptor>, MediaError> {
        self.calls.push(BackendCall::EnumerateInputDevices);
        if self.fail_enumeration {
            return Err(MediaError::Backend("joystick subsystem unavailable".into()));
        }
        Ok(self.devices.clone())
    }

    fn init_input_device(&mut self, device: &DeviceDescriptor) -> Result<(), MediaError> {
        self.calls.push(BackendCall::InitInputDevice(device.handle));
        if self.failing_devices.contains(&device.handle) {
            return Err(MediaError::DeviceUnavailable(device.handle));
        }
        Ok(())
    }

    fn init_platform_input(&mut self) -> Result<(), MediaError> {
        self.calls.push(BackendCall::InitPlatformInput);
        Ok(())
    }

    fn map_key(&mut self, from: PlatformKey, to: EngineKey) -> Result<(), MediaError> {
        self.calls.push(BackendCall::MapKey(from, to));
        Ok(())
    }
}
