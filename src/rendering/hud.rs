//! Score display: two text labels and the reset control.

use bevy::prelude::*;

use crate::core::components::{HighScoreText, ResetButton, ScoreText};
use crate::core::config::{GameConfig, ScreenPoint};
use crate::gameplay::session::ScoreState;
use crate::rendering::assets::GameAssets;
use crate::rendering::palette;

pub fn score_label(score: u32) -> String {
    format!("score: {score}")
}

pub fn high_score_label(high_score: u32) -> String {
    format!("high score: {high_score}")
}

fn anchored(at: ScreenPoint) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(at.x),
        top: Val::Px(at.y),
        ..default()
    }
}

pub fn spawn_hud(
    commands: &mut Commands,
    cfg: &GameConfig,
    assets: Option<&GameAssets>,
    score: &ScoreState,
) {
    let font = TextFont {
        font_size: cfg.hud.font_size,
        ..default()
    };
    commands.spawn((
        ScoreText,
        Text::new(score_label(score.score)),
        font.clone(),
        TextColor(palette::HUD_TEXT),
        anchored(cfg.hud.score),
    ));
    commands.spawn((
        HighScoreText,
        Text::new(high_score_label(score.high_score)),
        font,
        TextColor(palette::HUD_TEXT),
        anchored(cfg.hud.high_score),
    ));

    // Configured position is the button centre.
    let size = cfg.hud.reset_button_size;
    let mut button = commands.spawn((
        ResetButton,
        Button,
        Node {
            width: Val::Px(size.x),
            height: Val::Px(size.y),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..anchored(ScreenPoint::new(
                cfg.hud.reset_button.x - size.x * 0.5,
                cfg.hud.reset_button.y - size.y * 0.5,
            ))
        },
        BackgroundColor(palette::BUTTON_IDLE),
    ));
    match assets {
        Some(a) => {
            button.insert(ImageNode::new(a.reset_button.clone()));
        }
        None => {
            button.with_children(|p| {
                p.spawn((
                    Text::new("reset"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
        }
    }
}

/// Rewrite both labels when their text differs.
pub fn write_labels(
    score: &ScoreState,
    score_text: Option<Mut<Text>>,
    high_score_text: Option<Mut<Text>>,
) {
    if let Some(mut text) = score_text {
        let label = score_label(score.score);
        if text.0 != label {
            text.0 = label;
        }
    }
    if let Some(mut text) = high_score_text {
        let label = high_score_label(score.high_score);
        if text.0 != label {
            text.0 = label;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_display_format() {
        assert_eq!(score_label(0), "score: 0");
        assert_eq!(score_label(12), "score: 12");
        assert_eq!(high_score_label(7), "high score: 7");
    }

    #[test]
    fn spawn_hud_creates_labels_and_button() {
        let mut world = World::new();
        let cfg = GameConfig::default();
        {
            let mut queue = bevy::ecs::world::CommandQueue::default();
            let mut commands = Commands::new(&mut queue, &world);
            spawn_hud(
                &mut commands,
                &cfg,
                None,
                &ScoreState {
                    score: 3,
                    high_score: 9,
                },
            );
            drop(commands);
            queue.apply(&mut world);
        }
        let mut q = world.query_filtered::<&Text, With<ScoreText>>();
        assert_eq!(q.iter(&world).next().unwrap().0, "score: 3");
        let mut q = world.query_filtered::<&Text, With<HighScoreText>>();
        assert_eq!(q.iter(&world).next().unwrap().0, "high score: 9");
        let mut q = world.query_filtered::<&Node, With<ResetButton>>();
        let node = q.iter(&world).next().unwrap();
        assert_eq!(node.left, Val::Px(337.0));
        assert_eq!(node.top, Val::Px(18.0));
    }
}
