// Startup context
//
// Replaces process-wide engine globals with one value built by an explicit call.
// Nothing touches the filesystem or the display until `prepare`/`bootstrap` run.

use crate::config::{ConfigManager, UserPaths};
use crate::error::StartupError;
use crate::media::{MediaBackend, Rect};
use crate::models::{GameConfig, Resolution, SaveMethod, SaveSlots};
use crate::services::devices::{self, Blacklist, DeviceHandles};
use crate::services::{DisplayParams, Platform, ResourceLocator};
use camino::Utf8Path;

/// Everything the engine needs to know before the game loop starts.
///
/// Built once by [`StartupContext::prepare`] and read-only afterwards. Components
/// receive it by reference.
#[derive(Debug, Clone)]
pub struct StartupContext {
    pub platform: Platform,
    pub paths: UserPaths,
    pub config: GameConfig,
    pub display: DisplayParams,
    pub saves: SaveSlots,
    pub resources: ResourceLocator,
    pub blacklist: Blacklist,
}

impl StartupContext {
    /// Create the user directories, resolve the configuration and derive the display
    /// parameters.
    ///
    /// # Arguments
    /// * `platform` - The platform selected for this process
    /// * `game_dir` - User game directory (usually `platform.config_directory()`)
    /// * `base_dir` - Install base holding `resources/` and `mod/`
    ///
    /// # Errors
    /// Fails on unwritable directories, a malformed config file, or a resolution that
    /// cannot be scaled.
    pub fn prepare<P, Q>(platform: Platform, game_dir: P, base_dir: Q) -> Result<Self, StartupError>
    where
        P: AsRef<Utf8Path>,
        Q: AsRef<Utf8Path>,
    {
        let paths = UserPaths::new(game_dir);
        let manager = ConfigManager::new(paths.clone());
        manager.ensure_directories()?;

        let config = manager.load_or_create()?;
        let params = DisplayParams::from_config(&config)?;

        tracing::info!(
            "Display: {}x{}, scale {}, tile {:?}, icon {:?}",
            params.screen_size.width(),
            params.screen_size.height(),
            params.scale,
            params.tile_size,
            params.icon_size
        );

        let saves = SaveSlots::new(&paths.save_dir, SaveMethod::default());
        let resources = ResourceLocator::new(base_dir, config.data_pack());

        Ok(Self {
            platform,
            paths,
            config,
            display: params,
            saves,
            resources,
            blacklist: Blacklist::default(),
        })
    }

    /// Replace the input device blacklist.
    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn screen_size(&self) -> Resolution {
        self.display.screen_size
    }

    pub fn dev_tools(&self) -> bool {
        self.config.dev_tools()
    }
}

/// A started engine: the context plus the live device handles.
#[derive(Debug, Clone)]
pub struct Session {
    pub context: StartupContext,
    pub devices: DeviceHandles,
}

impl Session {
    pub fn screen_rect(&self) -> Rect {
        self.devices.screen_rect
    }
}

/// Run platform setup and device initialization against `backend`.
///
/// Platform-specific setup always precedes the backend's own initialization.
pub fn bootstrap<B: MediaBackend + ?Sized>(
    context: StartupContext,
    backend: &mut B,
) -> Result<Session, StartupError> {
    context.platform.init(backend)?;

    let devices = devices::bootstrap(
        context.platform,
        &context.config,
        &context.display,
        &context.blacklist,
        backend,
    )?;

    tracing::info!(
        "Startup complete: {} input device(s) active",
        devices.devices.len()
    );

    Ok(Session { context, devices })
}
