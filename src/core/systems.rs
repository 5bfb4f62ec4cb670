//! Core domain: camera and run clock systems.

use bevy::prelude::*;

use crate::core::camera::FollowCamera;
use crate::core::resources::RunConfig;
use crate::movement::{Player, PlayerBody};

pub(crate) fn setup_camera(mut commands: Commands, camera: Res<FollowCamera>) {
    let center = camera.view_center();
    commands.spawn((Camera2d, Transform::from_xyz(center.x, -center.y, 100.0)));
}

/// Follows the player and moves the Bevy camera to match.
pub(crate) fn follow_player(
    mut camera: ResMut<FollowCamera>,
    player_query: Query<&PlayerBody, With<Player>>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(body) = player_query.single() else {
        return;
    };

    camera.update(&body.0.bounds());
    let center = camera.view_center();

    for mut transform in &mut camera_query {
        transform.translation.x = center.x;
        transform.translation.y = -center.y;
    }
}

pub(crate) fn tick_run_clock(time: Res<Time>, mut run_config: ResMut<RunConfig>) {
    run_config.elapsed_secs += time.delta_secs();
}
