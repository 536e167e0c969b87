use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::session::SessionController;

const LOG_TARGET: &str = "autoclose";

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits the app after `window.autoClose` seconds when that is positive.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: LOG_TARGET, seconds = secs, "will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    controller: Option<Res<SessionController>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if timer.finished() || !timer.tick(time.delta()).just_finished() {
        return;
    }
    match controller.as_deref() {
        Some(c) => info!(
            target: LOG_TARGET,
            score = c.state().score.score,
            high_score = c.state().score.high_score,
            rounds = c.state().rounds_completed,
            "timer finished, requesting app exit"
        ),
        None => info!(target: LOG_TARGET, "timer finished, requesting app exit"),
    }
    ev_exit.write(AppExit::Success);
}
