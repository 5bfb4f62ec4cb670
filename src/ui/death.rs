//! UI domain: death detection, death screen, and the restart flow.

use bevy::prelude::*;

use crate::core::{GameState, RunConfig};
use crate::level::LEVEL_DEATH_Y;
use crate::movement::{Player, PlayerBody};

/// Marker for the death screen overlay
#[derive(Component)]
pub struct DeathScreenUI;

pub(crate) fn detect_player_death(
    player_query: Query<&PlayerBody, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(body) = player_query.single() else {
        return;
    };

    let controller = &body.0;
    if controller.is_dead() || controller.fell_below(LEVEL_DEATH_Y) {
        info!(
            "Player died: health={}, top={}",
            controller.health().current,
            controller.bounds().top()
        );
        next_state.set(GameState::Dead);
    }
}

pub(crate) fn spawn_death_screen(mut commands: Commands) {
    commands
        .spawn((
            DeathScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                padding: UiRect::top(Val::Px(200.0)),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("You Died!"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.0)),
                Node {
                    margin: UiRect::bottom(Val::Px(44.0)),
                    ..default()
                },
            ));

            for hint in ["Press R to Restart", "Press M for Main Menu"] {
                parent.spawn((
                    Text::new(hint),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        margin: UiRect::bottom(Val::Px(12.0)),
                        ..default()
                    },
                ));
            }
        });
}

pub(crate) fn handle_death_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut run_config: ResMut<RunConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        run_config.request_restart();
        next_state.set(GameState::Playing);
        info!("Restarting run");
    } else if keyboard.just_pressed(KeyCode::KeyM) {
        next_state.set(GameState::MainMenu);
        info!("Returning to main menu");
    }
}
