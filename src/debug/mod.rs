//! Debug overlay for tuning movement.
//!
//! F1 or backtick toggles a readout of the player's physical and ability
//! state. Ctrl+K deals 10 damage and Ctrl+H heals fully, for exercising the
//! death flow.

use bevy::prelude::*;

use crate::core::{FollowCamera, GameState, RunConfig};
use crate::movement::{Player, PlayerBody};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_info,
                handle_debug_hotkeys.run_if(in_state(GameState::Playing)),
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}

fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !(keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote)) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!("[DEBUG] Info overlay {}", if debug_state.show_info { "ON" } else { "OFF" });

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<&mut PlayerBody, With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    let Ok(mut body) = player_query.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyK) {
        let dealt = body.0.take_damage(10);
        info!("[DEBUG] Dealt {} damage, health={}", dealt, body.0.health().current);
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        let max = body.0.health().max;
        let healed = body.0.heal(max);
        info!("[DEBUG] Healed {}, health={}", healed, body.0.health().current);
    }
}

fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    camera: Res<FollowCamera>,
    game_state: Res<State<GameState>>,
    player_query: Query<&PlayerBody, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let Ok(body) = player_query.single() else {
        **text = format!("State: {:?}\nNo player", game_state.get());
        return;
    };

    let controller = &body.0;
    let bounds = controller.bounds();
    let on_screen = camera.apply(&bounds);
    let velocity = controller.velocity();
    **text = format!(
        "State: {:?}\nPos: ({}, {})  Screen: ({}, {})\nVel: ({:.2}, {:.2})\nVisual: {}\nGrounded: {}  Wall: {:?}\nJumps: {}/{}\nDash: {}  Cooldown: {}\nParticles: {}\nSeed: {}",
        game_state.get(),
        bounds.x,
        bounds.y,
        on_screen.x,
        on_screen.y,
        velocity.x,
        velocity.y,
        controller.visual_state().name(),
        controller.is_grounded(),
        controller.wall_side(),
        controller.jump_count(),
        controller.tuning().max_jumps,
        controller.is_dashing(),
        controller.dash_cooldown(),
        controller.particles().len(),
        run_config.seed,
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(10.0),
            top: Val::Px(10.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
