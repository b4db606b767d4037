//! Integration tests for ConfigManager and configuration file handling
//!
//! These tests verify:
//! - Default configuration generation
//! - Filling of missing keys and write-back normalization
//! - Round-trip stability across load/persist/reload
//! - Fatal handling of malformed files
//! - Directory creation

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use tuxemon_startup::{ConfigError, ConfigManager, GameConfig, Resolution, UserPaths};

fn create_test_manager() -> (TempDir, ConfigManager) {
    let temp_dir = TempDir::new().unwrap();
    let game_dir = Utf8PathBuf::try_from(temp_dir.path().join(".tuxemon")).unwrap();
    let manager = ConfigManager::new(UserPaths::new(game_dir));
    manager.ensure_directories().unwrap();
    (temp_dir, manager)
}

#[test]
fn test_directories_created() {
    let (_temp_dir, manager) = create_test_manager();

    assert!(manager.paths().game_dir.is_dir());
    assert!(manager.paths().data_dir.is_dir());
    assert!(manager.paths().save_dir.is_dir());

    // Second call must not fail on existing directories
    manager.ensure_directories().unwrap();
}

#[test]
fn test_generate_default_config() {
    let (_temp_dir, manager) = create_test_manager();

    let config = manager.load_or_create().unwrap();

    assert_eq!(config, GameConfig::default());
    let written = fs::read_to_string(manager.config_path()).unwrap();
    assert!(written.contains("display:"));
    assert!(written.contains("game:"));
    assert!(written.contains("window_caption: Tuxemon"));
}

#[test]
fn test_partial_config_filled_and_rewritten() {
    let (_temp_dir, manager) = create_test_manager();

    let partial = r#"
display:
  resolution: [720, 480]
  fullscreen: true
game:
  data: spyder
"#;
    fs::write(manager.config_path(), partial).unwrap();

    let config = manager.load_or_create().unwrap();

    assert_eq!(config.resolution(), Resolution(720, 480));
    assert!(config.display.fullscreen);
    assert!(config.display.scaling); // default
    assert!(config.display.hide_mouse); // default
    assert_eq!(config.data_pack(), "spyder");
    assert!(!config.dev_tools()); // default

    let written = fs::read_to_string(manager.config_path()).unwrap();
    for key in [
        "resolution",
        "window_caption",
        "large_gui",
        "scaling",
        "fullscreen",
        "hide_mouse",
        "data",
        "dev_tools",
    ] {
        assert!(written.contains(key), "missing key {} in {}", key, written);
    }
}

#[test]
fn test_round_trip_is_stable() {
    let (_temp_dir, manager) = create_test_manager();

    fs::write(
        manager.config_path(),
        "display:\n  large_gui: true\n  window_caption: My Game\n",
    )
    .unwrap();

    let first = manager.load_or_create().unwrap();
    let first_text = fs::read_to_string(manager.config_path()).unwrap();

    let second = manager.load_or_create().unwrap();
    let second_text = fs::read_to_string(manager.config_path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_text, second_text);
}

#[test]
fn test_custom_values_survive_save() {
    let (_temp_dir, manager) = create_test_manager();

    let mut config = GameConfig::default();
    config.display.resolution = Resolution(1920, 1080);
    config.display.window_caption = "Tuxemon Dev".to_string();
    config.game.dev_tools = true;
    manager.save(&config).unwrap();

    let loaded = manager.load_or_create().unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_config_is_fatal() {
    let (_temp_dir, manager) = create_test_manager();
    fs::write(manager.config_path(), "display:\n  resolution: [1, 2\n").unwrap();

    let err = manager.load_or_create().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("tuxemon.yaml"));
}

#[test]
fn test_wrong_type_is_fatal() {
    let (_temp_dir, manager) = create_test_manager();
    fs::write(manager.config_path(), "game:\n  dev_tools: [true]\n").unwrap();

    assert!(matches!(
        manager.load_or_create(),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_unknown_keys_dropped_on_rewrite() {
    let (_temp_dir, manager) = create_test_manager();
    fs::write(manager.config_path(), "display:\n  fps: 60\n").unwrap();

    let config = manager.load_or_create().unwrap();
    assert_eq!(config, GameConfig::default());

    let written = fs::read_to_string(manager.config_path()).unwrap();
    assert!(!written.contains("fps"));
}
