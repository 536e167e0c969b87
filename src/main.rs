use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use star_catcher::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(about = "Collect the stars, dodge the bombs", version)]
struct Args {
    /// Config layers merged in order; later files win. Defaults to
    /// assets/config/game.ron then assets/config/game.local.ron.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Fixed RNG seed for reproducible bomb spawns.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds (0 disables).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let layers = if args.config.is_empty() {
        vec![
            PathBuf::from("assets/config/game.ron"),
            PathBuf::from("assets/config/game.local.ron"),
        ]
    } else {
        args.config.clone()
    };
    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    if !args.config.is_empty() && used.is_empty() {
        bail!("none of the config files could be loaded: {}", errors.join("; "));
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }));
    // Logging is only live once DefaultPlugins are added.
    info!(target: "config", "config layers applied: {:?}", used);
    for e in &errors {
        warn!(target: "config", "config layer skipped: {e}");
    }
    for w in cfg.validate() {
        warn!(target: "config", "config: {w}");
    }
    app.insert_resource(cfg).add_plugins(GamePlugin).run();
    Ok(())
}
