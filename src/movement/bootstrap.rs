//! Movement domain: player spawn and teardown for each run.

use bevy::prelude::*;
use rand::Rng;

use crate::core::RunConfig;
use crate::level::Level;
use crate::movement::{MovementTuning, Player, PlayerBody, PlayerController};
use crate::sprites::PlayerFrames;

/// Spawns a fresh player when a new run starts. Resuming from pause keeps the
/// existing one.
pub(crate) fn spawn_player(
    mut commands: Commands,
    mut run_config: ResMut<RunConfig>,
    tuning: Res<MovementTuning>,
    level: Res<Level>,
    frames: Res<PlayerFrames>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !run_config.restart_requested && !existing_player.is_empty() {
        return;
    }

    for entity in &existing_player {
        commands.entity(entity).despawn();
    }

    run_config.seed = rand::rng().random();
    run_config.elapsed_secs = 0.0;
    run_config.restart_requested = false;

    let spawn = level.spawn_point(tuning.body_height);
    let controller = PlayerController::seeded(
        spawn,
        tuning.clone(),
        frames.0.clone(),
        run_config.seed,
    );

    info!(
        "Spawning player: spawn=({}, {}), seed={}, max_jumps={}, dash_speed={}",
        spawn.x, spawn.y, run_config.seed, tuning.max_jumps, tuning.dash_speed
    );

    commands.spawn((
        Player,
        PlayerBody(controller),
        Sprite {
            custom_size: Some(Vec2::new(
                tuning.body_width as f32,
                tuning.body_height as f32,
            )),
            ..default()
        },
        Transform::from_xyz(spawn.x, -spawn.y, 10.0),
    ));
}

pub(crate) fn despawn_player(mut commands: Commands, players: Query<Entity, With<Player>>) {
    for entity in &players {
        commands.entity(entity).despawn();
    }
}
