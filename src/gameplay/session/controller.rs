use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::state::{SessionPhase, SessionState, StarId};
use crate::core::config::GameConfig;
use crate::gameplay::motion::{map_motion, MotionInput, PlayerAnimation};
use crate::gameplay::scene::{CollectOutcome, SceneCallbacks, SceneHost};
use crate::gameplay::spawn::{roll_bomb, sample};

const LOG_TARGET: &str = "session";

/// What a reset committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetReport {
    pub final_score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

/// Owns the session state and applies the game rules through a [`SceneHost`].
/// The RNG is injected so spawns are reproducible under a fixed seed.
#[derive(Resource)]
pub struct SessionController<R = StdRng> {
    cfg: GameConfig,
    rng: R,
    state: SessionState,
    created: bool,
}

impl SessionController<StdRng> {
    /// Seeded from `cfg.seed` when set, from entropy otherwise.
    pub fn from_config(cfg: GameConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(cfg, rng)
    }
}

impl<R: Rng> SessionController<R> {
    pub fn new(cfg: GameConfig, rng: R) -> Self {
        let state = SessionState::new(cfg.star_slots());
        Self {
            cfg,
            rng,
            state,
            created: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    /// Route every star overlap reported in one tick. Duplicates and stars that
    /// were already inactive when the tick started are dropped first, so a
    /// round completes at most once per batch.
    pub fn collect_stars<H: SceneHost>(&mut self, host: &mut H, ids: &[StarId]) -> Vec<CollectOutcome> {
        let mut batch: Vec<StarId> = ids
            .iter()
            .copied()
            .filter(|id| self.state.stars.is_active(*id))
            .collect();
        batch.sort_unstable();
        batch.dedup();
        batch
            .into_iter()
            .map(|id| self.on_star_overlap(host, id))
            .collect()
    }

    /// Handler behind the reset control. Does nothing unless a game over armed it.
    pub fn fire_reset<H: SceneHost>(&mut self, host: &mut H) -> Option<ResetReport> {
        if !self.state.reset.fire() {
            debug!(target: LOG_TARGET, "reset ignored: no game over pending");
            return None;
        }
        let final_score = self
            .state
            .score_at_collision
            .take()
            .unwrap_or(self.state.score.score);
        let new_high_score = self.state.score.commit_high_score(final_score);
        self.state.score.score = 0;
        host.show_score(&self.state.score);

        host.resume_physics();
        host.set_player_hit(false);
        host.clear_bombs();
        self.state.bombs = 0;
        self.refill_stars(host);
        self.drop_bomb(host);
        self.state.phase = SessionPhase::Playing;

        info!(
            target: LOG_TARGET,
            final_score,
            high_score = self.state.score.high_score,
            "reset: new session round started"
        );
        Some(ResetReport {
            final_score,
            high_score: self.state.score.high_score,
            new_high_score,
        })
    }

    fn refill_stars<H: SceneHost>(&mut self, host: &mut H) {
        self.state.stars.activate_all();
        for (id, slot) in self.state.stars.iter() {
            host.enable_star(id, slot.home);
        }
    }

    /// Spawn side follows the player's current (possibly frozen) x.
    fn drop_bomb<H: SceneHost>(&mut self, host: &mut H) {
        let player_x = host
            .player_position()
            .map(|p| p.x)
            .unwrap_or(self.cfg.player.start.x);
        let bomb = roll_bomb(&mut self.rng, player_x, &self.cfg.bombs);
        host.spawn_bomb(&bomb);
        self.state.bombs += 1;
        debug!(target: LOG_TARGET, ?bomb, bombs = self.state.bombs, "bomb dropped");
    }
}

impl<R: Rng> SceneCallbacks for SessionController<R> {
    fn preload<H: SceneHost>(&mut self, host: &mut H) {
        host.load_assets();
    }

    fn create<H: SceneHost>(&mut self, host: &mut H) {
        if self.created {
            warn!(target: LOG_TARGET, "create called twice; scene already built");
            return;
        }
        self.created = true;

        host.spawn_backdrop();
        for platform in &self.cfg.platforms.layout {
            host.spawn_platform(platform);
        }
        host.spawn_player(self.cfg.player.start.to_vec2());
        let homes: Vec<(StarId, Vec2)> = self.state.stars.iter().map(|(id, s)| (id, s.home)).collect();
        for (id, home) in homes {
            let bounce = sample(&mut self.rng, &self.cfg.stars.bounce);
            host.spawn_star(id, home, bounce);
        }
        self.drop_bomb(host);
        host.spawn_hud(&self.state.score);
        info!(
            target: LOG_TARGET,
            platforms = self.cfg.platforms.layout.len(),
            stars = self.state.stars.len(),
            "scene created"
        );
    }

    fn update<H: SceneHost>(&mut self, host: &mut H, input: &MotionInput) {
        if self.state.phase != SessionPhase::Playing {
            return;
        }
        let cmd = map_motion(input, &self.cfg.player);
        host.set_player_velocity_x(cmd.velocity_x);
        if let Some(vy) = cmd.jump {
            host.set_player_velocity_y(vy);
        }
        host.play_animation(cmd.animation);
    }

    fn on_star_overlap<H: SceneHost>(&mut self, host: &mut H, star: StarId) -> CollectOutcome {
        if self.state.phase != SessionPhase::Playing || !self.state.stars.deactivate(star) {
            return CollectOutcome::Ignored;
        }
        host.disable_star(star);
        self.state.score.score += 1;
        host.show_score(&self.state.score);

        if self.state.stars.active_count() > 0 {
            return CollectOutcome::Collected;
        }
        self.refill_stars(host);
        self.drop_bomb(host);
        self.state.rounds_completed += 1;
        info!(
            target: LOG_TARGET,
            round = self.state.rounds_completed,
            score = self.state.score.score,
            bombs = self.state.bombs,
            "round complete"
        );
        CollectOutcome::RoundComplete
    }

    fn on_bomb_hit<H: SceneHost>(&mut self, host: &mut H) -> bool {
        if self.state.phase == SessionPhase::GameOver {
            return false;
        }
        host.pause_physics();
        host.set_player_hit(true);
        host.play_animation(PlayerAnimation::Turn);
        self.state.phase = SessionPhase::GameOver;
        self.state.score_at_collision = Some(self.state.score.score);
        let armed = self.state.reset.arm();
        info!(
            target: LOG_TARGET,
            score = self.state.score.score,
            armed,
            "game over"
        );
        armed
    }
}
