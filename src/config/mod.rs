use crate::models::GameConfig;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use thiserror::Error;

/// Name of the config file inside the user game directory
pub const CONFIG_FILE_NAME: &str = "tuxemon.yaml";

/// Errors raised while resolving the game configuration.
///
/// All of these abort startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-user directory layout rooted at the platform config directory.
///
/// - `<game_dir>/tuxemon.yaml`: configuration file
/// - `<game_dir>/data`: user game data
/// - `<game_dir>/saves`: save slots
/// - `<game_dir>/logs`: rolling log files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPaths {
    pub game_dir: Utf8PathBuf,
    pub data_dir: Utf8PathBuf,
    pub save_dir: Utf8PathBuf,
    pub config_path: Utf8PathBuf,
}

impl UserPaths {
    pub fn new<P: AsRef<Utf8Path>>(game_dir: P) -> Self {
        let game_dir = game_dir.as_ref().to_path_buf();
        Self {
            data_dir: game_dir.join("data"),
            save_dir: game_dir.join("saves"),
            config_path: game_dir.join(CONFIG_FILE_NAME),
            game_dir,
        }
    }

    pub fn log_dir(&self) -> Utf8PathBuf {
        self.game_dir.join("logs")
    }
}

/// Configuration manager for loading and normalizing `tuxemon.yaml`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    paths: UserPaths,
}

impl ConfigManager {
    /// Create a new ConfigManager over the given user paths.
    ///
    /// No filesystem access happens until [`ensure_directories`](Self::ensure_directories)
    /// or [`load_or_create`](Self::load_or_create) is called.
    pub fn new(paths: UserPaths) -> Self {
        Self { paths }
    }

    /// Create the game, data and save directories if they are missing.
    ///
    /// Safe to call repeatedly.
    pub fn ensure_directories(&self) -> Result<(), ConfigError> {
        for dir in [
            &self.paths.game_dir,
            &self.paths.data_dir,
            &self.paths.save_dir,
        ] {
            if !dir.is_dir() {
                fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;
                tracing::debug!("Created directory {}", dir);
            }
        }
        Ok(())
    }

    /// Load the configuration, filling absent keys with defaults, and write the
    /// fully populated record back to disk.
    ///
    /// # Returns
    /// The resolved GameConfig. A missing file yields all defaults.
    ///
    /// # Errors
    /// A present but unparsable file is returned as [`ConfigError::Parse`] and is
    /// left untouched on disk.
    pub fn load_or_create(&self) -> Result<GameConfig, ConfigError> {
        let config = self.load()?;
        self.save(&config)?;
        Ok(config)
    }

    /// Resolve the configuration again from disk.
    ///
    /// Produces a new record; records handed out earlier are unaffected.
    pub fn reload(&self) -> Result<GameConfig, ConfigError> {
        tracing::info!("Reloading config from {}", self.paths.config_path);
        self.load_or_create()
    }

    fn load(&self) -> Result<GameConfig, ConfigError> {
        let path = &self.paths.config_path;
        if !path.exists() {
            tracing::info!("Config file not found at {}, generating defaults", path);
            return Ok(GameConfig::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        // An empty document carries no keys at all
        if contents.trim().is_empty() {
            tracing::warn!("Config file {} is empty, using defaults", path);
            return Ok(GameConfig::default());
        }

        let config: GameConfig =
            serde_yaml_ng::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::info!("Loaded config from {}", path);
        Ok(config)
    }

    /// Save the configuration in canonical form.
    pub fn save(&self, config: &GameConfig) -> Result<(), ConfigError> {
        let yaml_string = serde_yaml_ng::to_string(config).map_err(ConfigError::Serialize)?;

        let path = &self.paths.config_path;
        fs::write(path, yaml_string).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Saved config to {}", path);
        Ok(())
    }

    pub fn paths(&self) -> &UserPaths {
        &self.paths
    }

    pub fn config_path(&self) -> &Utf8Path {
        &self.paths.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resolution;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let game_dir = Utf8PathBuf::try_from(temp_dir.path().join(".tuxemon")).unwrap();
        let manager = ConfigManager::new(UserPaths::new(game_dir));
        manager.ensure_directories().unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_user_paths_layout() {
        let paths = UserPaths::new("/home/player/.tuxemon");
        assert_eq!(paths.data_dir, "/home/player/.tuxemon/data");
        assert_eq!(paths.save_dir, "/home/player/.tuxemon/saves");
        assert_eq!(paths.config_path, "/home/player/.tuxemon/tuxemon.yaml");
        assert_eq!(paths.log_dir(), "/home/player/.tuxemon/logs");
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let (manager, _temp_dir) = create_test_config_manager();
        manager.ensure_directories().unwrap();

        assert!(manager.paths().game_dir.is_dir());
        assert!(manager.paths().data_dir.is_dir());
        assert!(manager.paths().save_dir.is_dir());
    }

    #[test]
    fn test_missing_file_generates_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();
        assert!(!manager.config_path().exists());

        let config = manager.load_or_create().unwrap();

        assert_eq!(config, GameConfig::default());
        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_partial_file_is_normalized() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(manager.config_path(), "display:\n  large_gui: true\n").unwrap();

        let config = manager.load_or_create().unwrap();
        assert!(config.display.large_gui);
        assert_eq!(config.resolution(), Resolution(1280, 720));

        let written = fs::read_to_string(manager.config_path()).unwrap();
        assert!(written.contains("window_caption"));
        assert!(written.contains("dev_tools"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(manager.config_path(), "\n").unwrap();

        let config = manager.load_or_create().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_malformed_file_is_fatal_and_untouched() {
        let (manager, _temp_dir) = create_test_config_manager();
        let garbage = "display: [unterminated\n";
        fs::write(manager.config_path(), garbage).unwrap();

        let result = manager.load_or_create();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));

        let on_disk = fs::read_to_string(manager.config_path()).unwrap();
        assert_eq!(on_disk, garbage);
    }

    #[test]
    fn test_reload_sees_external_edits() {
        let (manager, _temp_dir) = create_test_config_manager();
        let first = manager.load_or_create().unwrap();

        let mut edited = first.clone();
        edited.game.dev_tools = true;
        manager.save(&edited).unwrap();

        let second = manager.reload().unwrap();
        assert!(!first.dev_tools());
        assert!(second.dev_tools());
    }
}
