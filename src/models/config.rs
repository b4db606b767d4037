use serde::{Deserialize, Serialize};

/// Game configuration from `tuxemon.yaml`
///
/// Every field carries a serde default so a partial file always resolves to
/// a fully populated record. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub game: GameSettings,
}

/// Window resolution in pixels, stored as `[width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution(pub u32, pub u32);

impl Resolution {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_resolution")]
    pub resolution: Resolution,

    #[serde(default = "default_window_caption")]
    pub window_caption: String,

    #[serde(default)]
    pub large_gui: bool,

    #[serde(default = "default_true")]
    pub scaling: bool,

    #[serde(default)]
    pub fullscreen: bool,

    #[serde(default = "default_true")]
    pub hide_mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Active data pack, looked up under `mod/<data>/`
    #[serde(default = "default_data")]
    pub data: String,

    #[serde(default)]
    pub dev_tools: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            window_caption: default_window_caption(),
            large_gui: false,
            scaling: true,
            fullscreen: false,
            hide_mouse: true,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            data: default_data(),
            dev_tools: false,
        }
    }
}

fn default_resolution() -> Resolution {
    Resolution(1280, 720)
}

fn default_window_caption() -> String {
    "Tuxemon".to_string()
}

fn default_data() -> String {
    "tuxemon".to_string()
}

fn default_true() -> bool {
    true
}

impl GameConfig {
    pub fn resolution(&self) -> Resolution {
        self.display.resolution
    }

    pub fn window_caption(&self) -> &str {
        &self.display.window_caption
    }

    /// Identifier of the active mod/data pack
    pub fn data_pack(&self) -> &str {
        &self.game.data
    }

    pub fn dev_tools(&self) -> bool {
        self.game.dev_tools
    }
}
