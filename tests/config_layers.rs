use std::io::Write;

use star_catcher::core::config::GameConfig;

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");
    let cfg = GameConfig::load_from_file(path).expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn local_layer_overrides_only_its_keys() {
    let base = r#"(
        window: (width: 800.0, height: 600.0, title: "Base"),
        player: (run_speed: 160.0, jump_speed: 430.0),
        seed: Some(1),
    )"#;
    let local = r"(
        player: (run_speed: 200.0),
        window: (autoClose: 2.5),
    )";
    let mut f1 = tempfile::NamedTempFile::new().unwrap();
    let mut f2 = tempfile::NamedTempFile::new().unwrap();
    f1.write_all(base.as_bytes()).unwrap();
    f2.write_all(local.as_bytes()).unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([f1.path(), f2.path()]);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.player.run_speed, 200.0);
    assert_eq!(cfg.player.jump_speed, 430.0);
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.window.auto_close, 2.5);
    assert_eq!(cfg.seed, Some(1));
}

#[test]
fn missing_layer_is_reported_not_fatal() {
    let mut f1 = tempfile::NamedTempFile::new().unwrap();
    f1.write_all(b"(stars: (count: 6))").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("game.local.ron");

    let (cfg, used, errors) = GameConfig::load_layered([f1.path(), missing.as_path()]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg.stars.count, 6);
    assert_eq!(cfg.star_slots().len(), 6);
}

#[test]
fn broken_layer_keeps_earlier_values() {
    let mut f1 = tempfile::NamedTempFile::new().unwrap();
    let mut f2 = tempfile::NamedTempFile::new().unwrap();
    f1.write_all(b"(world: (gravity: 500.0))").unwrap();
    f2.write_all(b"(world: (gravity: ").unwrap();
    let (cfg, used, errors) = GameConfig::load_layered([f1.path(), f2.path()]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg.world.gravity, 500.0);
}
