//! Bevy + Rapier side of the scene seam. Converts screen-space requests from the
//! session controller into entities, body mutations and HUD updates.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{
    Backdrop, Bomb, Grounded, HighScoreText, Platform, Player, PlayerReach, ScoreText, Star,
    Surface, SurfaceContacts,
};
use crate::core::config::{GameConfig, PlatformConfig};
use crate::gameplay::motion::PlayerAnimation;
use crate::gameplay::scene::SceneHost;
use crate::gameplay::session::{ScoreState, StarId};
use crate::gameplay::spawn::BombSpawn;
use crate::physics::rapier::{groups, set_simulation_active};
use crate::rendering::animation::{frames, PlayerAnimator};
use crate::rendering::assets::GameAssets;
use crate::rendering::{hud, palette};

const LOG_TARGET: &str = "session";
const Z_BACKDROP: f32 = -10.0;
const Z_PLATFORM: f32 = 0.0;
const Z_BODIES: f32 = 1.0;

/// Restitution that keeps its own value against zero-bounce platforms and walls.
fn max_restitution(coefficient: f32) -> Restitution {
    Restitution {
        coefficient,
        combine_rule: CoefficientCombineRule::Max,
    }
}

#[derive(SystemParam)]
pub struct BevyHost<'w, 's> {
    commands: Commands<'w, 's>,
    cfg: Res<'w, GameConfig>,
    assets: Option<Res<'w, GameAssets>>,
    asset_server: Option<Res<'w, AssetServer>>,
    layouts: Option<ResMut<'w, Assets<TextureAtlasLayout>>>,
    players: Query<
        'w,
        's,
        (
            &'static Transform,
            &'static mut Velocity,
            &'static mut Sprite,
            Option<&'static mut PlayerAnimator>,
        ),
        With<Player>,
    >,
    stars: Query<'w, 's, (Entity, &'static Star), Without<Player>>,
    bombs: Query<'w, 's, Entity, With<Bomb>>,
    score_text: Query<'w, 's, &'static mut Text, (With<ScoreText>, Without<HighScoreText>)>,
    high_score_text: Query<'w, 's, &'static mut Text, (With<HighScoreText>, Without<ScoreText>)>,
    rapier: Query<'w, 's, &'static mut RapierConfiguration>,
}

impl BevyHost<'_, '_> {
    fn world_at(&self, screen: Vec2, z: f32) -> Transform {
        Transform::from_translation(self.cfg.window.to_world(screen).extend(z))
    }

    fn star_entity(&self, id: StarId) -> Option<Entity> {
        self.stars.iter().find(|(_, s)| s.0 == id).map(|(e, _)| e)
    }

    /// Textured sprite when textures are loaded, flat colour otherwise.
    fn sprite(&self, image: impl Fn(&GameAssets) -> Handle<Image>, color: Color, size: Vec2) -> Sprite {
        match self.assets.as_deref() {
            Some(a) => Sprite {
                image: image(a),
                custom_size: Some(size),
                ..default()
            },
            None => Sprite::from_color(color, size),
        }
    }

    fn player_base_color(&self) -> Color {
        if self.assets.is_some() {
            Color::WHITE
        } else {
            palette::PLAYER
        }
    }
}

impl SceneHost for BevyHost<'_, '_> {
    fn load_assets(&mut self) {
        if !self.cfg.textures {
            debug!(target: LOG_TARGET, "textures disabled; using flat colours");
            return;
        }
        let (Some(server), Some(layouts)) = (self.asset_server.as_deref(), self.layouts.as_deref_mut())
        else {
            warn!(target: LOG_TARGET, "asset server unavailable; using flat colours");
            return;
        };
        let assets = GameAssets::load(server, layouts);
        self.commands.insert_resource(assets);
        info!(target: LOG_TARGET, "textures requested");
    }

    fn spawn_backdrop(&mut self) {
        let size = Vec2::new(self.cfg.window.width, self.cfg.window.height);
        let sprite = self.sprite(|a| a.sky.clone(), palette::SKY, size);
        self.commands
            .spawn((Backdrop, sprite, Transform::from_xyz(0.0, 0.0, Z_BACKDROP)));
    }

    fn spawn_platform(&mut self, platform: &PlatformConfig) {
        let size = self.cfg.platforms.base_size.to_vec2() * platform.scale;
        let half = size * 0.5;
        let sprite = self.sprite(|a| a.ground.clone(), palette::GROUND, size);
        let transform = self.world_at(Vec2::new(platform.x, platform.y), Z_PLATFORM);
        self.commands.spawn((
            Platform,
            Surface(half),
            sprite,
            transform,
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            groups::platform(),
        ));
    }

    fn spawn_player(&mut self, at: Vec2) {
        let p = &self.cfg.player;
        let size = p.size.to_vec2();
        let half = size * 0.5;
        let gravity = self.cfg.world.gravity;
        let gravity_scale = if gravity > 0.0 {
            (gravity + p.extra_gravity) / gravity
        } else {
            1.0
        };
        let mut animator = PlayerAnimator::default();
        animator.play(PlayerAnimation::Turn);
        let sprite = match self.assets.as_deref() {
            Some(a) => Sprite::from_atlas_image(
                a.player.clone(),
                TextureAtlas {
                    layout: a.player_layout.clone(),
                    index: frames(PlayerAnimation::Turn).0,
                },
            ),
            None => Sprite::from_color(palette::PLAYER, size),
        };
        let transform = self.world_at(at, Z_BODIES);
        self.commands
            .spawn((
                Player,
                sprite,
                transform,
                animator,
                SurfaceContacts::default(),
                Grounded::default(),
                RigidBody::Dynamic,
                Collider::cuboid(half.x, half.y),
                Velocity::zero(),
                max_restitution(p.bounce),
                Friction::coefficient(0.0),
                GravityScale(gravity_scale),
                LockedAxes::ROTATION_LOCKED,
                ActiveEvents::COLLISION_EVENTS,
                groups::player(),
            ))
            .with_children(|c| {
                c.spawn((
                    PlayerReach,
                    Collider::cuboid(half.x, half.y),
                    Sensor,
                    ActiveEvents::COLLISION_EVENTS,
                    groups::reach(),
                    Transform::default(),
                ));
            });
        info!(target: LOG_TARGET, x = at.x, y = at.y, gravity_scale, "player spawned");
    }

    fn spawn_star(&mut self, id: StarId, at: Vec2, bounce: f32) {
        let size = self.cfg.stars.size;
        let half = size * 0.5;
        let sprite = self.sprite(|a| a.star.clone(), palette::STAR, Vec2::splat(size));
        let transform = self.world_at(at, Z_BODIES);
        self.commands.spawn((
            Star(id),
            sprite,
            transform,
            RigidBody::Dynamic,
            Collider::cuboid(half, half),
            Velocity::zero(),
            max_restitution(bounce),
            LockedAxes::ROTATION_LOCKED,
            groups::star(),
        ));
    }

    fn spawn_bomb(&mut self, bomb: &BombSpawn) {
        let b = &self.cfg.bombs;
        let radius = b.radius * b.scale;
        let sprite = self.sprite(|a| a.bomb.clone(), palette::BOMB, Vec2::splat(radius * 2.0));
        let transform = self.world_at(bomb.position, Z_BODIES);
        // Screen y grows downward.
        let linvel = Vec2::new(bomb.velocity.x, -bomb.velocity.y);
        self.commands.spawn((
            Bomb,
            sprite,
            transform,
            RigidBody::Dynamic,
            Collider::ball(radius),
            Velocity::linear(linvel),
            max_restitution(b.bounce),
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Ccd::enabled(),
            groups::bomb(),
        ));
    }

    fn spawn_hud(&mut self, score: &ScoreState) {
        let assets = self.assets.as_deref();
        hud::spawn_hud(&mut self.commands, &self.cfg, assets, score);
    }

    fn disable_star(&mut self, id: StarId) {
        let Some(entity) = self.star_entity(id) else {
            warn!(target: LOG_TARGET, star = id.0, "disable_star: no such star");
            return;
        };
        self.commands
            .entity(entity)
            .insert((RigidBodyDisabled, ColliderDisabled, Visibility::Hidden));
    }

    fn enable_star(&mut self, id: StarId, at: Vec2) {
        let Some(entity) = self.star_entity(id) else {
            warn!(target: LOG_TARGET, star = id.0, "enable_star: no such star");
            return;
        };
        let transform = self.world_at(at, Z_BODIES);
        self.commands
            .entity(entity)
            .remove::<(RigidBodyDisabled, ColliderDisabled)>()
            .insert((transform, Velocity::zero(), Visibility::Inherited));
    }

    fn clear_bombs(&mut self) {
        let mut n = 0usize;
        for e in &self.bombs {
            self.commands.entity(e).despawn();
            n += 1;
        }
        debug!(target: LOG_TARGET, cleared = n, "bombs cleared");
    }

    fn player_position(&self) -> Option<Vec2> {
        self.players
            .iter()
            .next()
            .map(|(tf, ..)| self.cfg.window.to_screen(tf.translation.truncate()))
    }

    fn set_player_velocity_x(&mut self, vx: f32) {
        match self.players.iter_mut().next() {
            Some((_, mut vel, ..)) => {
                if vel.linvel.x != vx {
                    vel.linvel.x = vx;
                }
            }
            None => warn!(target: LOG_TARGET, "set_player_velocity_x: no player"),
        }
    }

    fn set_player_velocity_y(&mut self, vy: f32) {
        match self.players.iter_mut().next() {
            Some((_, mut vel, ..)) => vel.linvel.y = -vy,
            None => warn!(target: LOG_TARGET, "set_player_velocity_y: no player"),
        }
    }

    fn play_animation(&mut self, animation: PlayerAnimation) {
        if let Some((_, _, _, Some(mut animator))) = self.players.iter_mut().next() {
            if animator.animation() != animation {
                animator.play(animation);
            }
        }
    }

    fn set_player_hit(&mut self, hit: bool) {
        let color = if hit {
            palette::HIT_TINT
        } else {
            self.player_base_color()
        };
        if let Some((_, _, mut sprite, _)) = self.players.iter_mut().next() {
            sprite.color = color;
        }
    }

    fn pause_physics(&mut self) {
        set_simulation_active(&mut self.rapier, false);
    }

    fn resume_physics(&mut self) {
        set_simulation_active(&mut self.rapier, true);
    }

    fn show_score(&mut self, score: &ScoreState) {
        hud::write_labels(
            score,
            self.score_text.iter_mut().next(),
            self.high_score_text.iter_mut().next(),
        );
    }
}
