//! Integration tests for resource path resolution
//!
//! These tests verify:
//! - Mod-over-base precedence
//! - Fallback to base resources
//! - Not-found results
//! - Wiring of the active data pack from the configuration

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use tuxemon_startup::{Platform, ResourceLocator, StartupContext};

fn create_install() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let base = Utf8PathBuf::try_from(temp_dir.path().join("install")).unwrap();
    fs::create_dir_all(base.join("resources/sprites")).unwrap();
    fs::create_dir_all(base.join("resources/music")).unwrap();
    fs::create_dir_all(base.join("mod/tuxemon/sprites")).unwrap();
    (temp_dir, base)
}

#[test]
fn test_hero_sprite_from_resources_when_mod_lacks_it() {
    let (_temp_dir, base) = create_install();
    fs::write(base.join("resources/sprites/hero.png"), b"png").unwrap();

    let locator = ResourceLocator::new(&base, "tuxemon");

    assert_eq!(
        locator.fetch(&["sprites", "hero.png"]),
        Some(base.join("resources/sprites/hero.png"))
    );
}

#[test]
fn test_mod_file_overrides_resource() {
    let (_temp_dir, base) = create_install();
    fs::write(base.join("resources/sprites/hero.png"), b"base").unwrap();
    fs::write(base.join("mod/tuxemon/sprites/hero.png"), b"mod").unwrap();

    let locator = ResourceLocator::new(&base, "tuxemon");
    let found = locator.fetch(&["sprites", "hero.png"]).unwrap();

    assert_eq!(found, base.join("mod/tuxemon/sprites/hero.png"));
    assert_eq!(fs::read(found).unwrap(), b"mod");
}

#[test]
fn test_missing_resource_is_none() {
    let (_temp_dir, base) = create_install();
    let locator = ResourceLocator::new(&base, "tuxemon");

    assert_eq!(locator.fetch(&["music", "battle.ogg"]), None);
}

#[test]
fn test_nested_segments() {
    let (_temp_dir, base) = create_install();
    fs::create_dir_all(base.join("resources/maps/towns")).unwrap();
    fs::write(base.join("resources/maps/towns/home.tmx"), b"map").unwrap();

    let locator = ResourceLocator::new(&base, "tuxemon");
    let segments = vec!["maps".to_string(), "towns".to_string(), "home.tmx".to_string()];

    assert_eq!(
        locator.fetch(&segments),
        Some(base.join("resources/maps/towns/home.tmx"))
    );
}

#[test]
fn test_context_uses_configured_data_pack() {
    let (temp_dir, base) = create_install();
    let game_dir = Utf8PathBuf::try_from(temp_dir.path().join("home/.tuxemon")).unwrap();
    fs::create_dir_all(&game_dir).unwrap();
    fs::write(game_dir.join("tuxemon.yaml"), "game:\n  data: spyder\n").unwrap();

    fs::create_dir_all(base.join("mod/spyder/sprites")).unwrap();
    fs::write(base.join("resources/sprites/hero.png"), b"base").unwrap();
    fs::write(base.join("mod/spyder/sprites/hero.png"), b"spyder").unwrap();

    let context = StartupContext::prepare(Platform::Standard, &game_dir, &base).unwrap();

    assert_eq!(
        context.resources.fetch(&["sprites", "hero.png"]),
        Some(base.join("mod/spyder/sprites/hero.png"))
    );
}
