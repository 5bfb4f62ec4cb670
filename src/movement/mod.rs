//! Movement domain: player physics, collision, and the Bevy wiring around them.

mod bootstrap;
pub mod collisions;
mod components;
mod controller;
mod resources;
mod systems;

pub use collisions::Aabb;
pub use components::{
    DashState, Facing, Health, MovementState, Player, PlayerBody, WallContact,
};
pub use controller::{PlayerController, derive_visual_state};
pub use resources::{MovementTuning, PlayerInput};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{despawn_player, spawn_player};
use crate::movement::systems::{read_input, update_player};

/// System set for the per-frame simulation step, so rendering can run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSimulation;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(OnEnter(GameState::MainMenu), despawn_player)
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                (read_input, update_player)
                    .chain()
                    .in_set(PlayerSimulation)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
