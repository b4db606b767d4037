//! Tuxemon startup - runs the engine's startup pipeline.
//!
//! # Execution Flow
//!
//! 1. Select the platform (restricted handheld or standard desktop)
//! 2. Initialize logging → `<game dir>/logs/tuxemon.<date>`
//! 3. Prepare the startup context:
//!    - create the game, data and save directories
//!    - load `tuxemon.yaml`, fill missing keys, write it back
//!    - derive scale, tile and icon sizes
//! 4. Bootstrap the media backend: audio pre-init, display, pointer, input devices
//! 5. Log a summary of the resolved session
//!
//! The current working directory is used as the install base, so `resources/` and
//! `mod/` are looked up relative to it.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use tuxemon_startup::media::HeadlessBackend;
use tuxemon_startup::{APP_NAME, Platform, StartupContext, UserPaths, VERSION};

fn main() -> Result<()> {
    let platform = Platform::detect();
    let game_dir = platform
        .config_directory()
        .context("Failed to resolve the user game directory")?;

    let log_dir = UserPaths::new(&game_dir).log_dir();
    let _guard =
        tuxemon_startup::logging::setup_logging_with_console(&log_dir, "tuxemon", false, true)?;

    tracing::info!("Starting {} v{} on {:?} platform", APP_NAME, VERSION, platform);

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let base_dir = Utf8PathBuf::try_from(cwd).context("Install directory is not valid UTF-8")?;

    let context = StartupContext::prepare(platform, &game_dir, &base_dir).map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        e
    })?;

    let mut backend = HeadlessBackend::new();
    let session = tuxemon_startup::bootstrap(context, &mut backend).map_err(|e| {
        tracing::error!("Device bootstrap failed: {}", e);
        e
    })?;

    let ctx = &session.context;
    tracing::info!(
        "Session ready: screen {:?}, scale {}, data pack '{}', dev tools {}, saves in {} ({})",
        session.screen_rect(),
        ctx.display.scale,
        ctx.config.data_pack(),
        ctx.dev_tools(),
        ctx.saves.save_dir(),
        ctx.saves.method()
    );

    Ok(())
}
