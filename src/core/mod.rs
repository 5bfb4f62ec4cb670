//! Core domain: game state, run resources, and the camera.

mod camera;
mod resources;
mod state;
mod systems;

pub use camera::{CameraMode, FollowCamera};
pub use resources::RunConfig;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, tick_run_clock};
use crate::movement::PlayerSimulation;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<FollowCamera>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (tick_run_clock, follow_player.after(PlayerSimulation))
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
