//! Sprites module for player animation playback and rendering.
//!
//! This module handles:
//! - Visual states and frame-cycling animations
//! - Loading the player sprite manifest from JSON
//! - Mirroring the simulated player onto its Bevy sprite

pub mod animation;
pub mod manifest;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

use crate::core::GameState;
use crate::movement::{PlayerBody, PlayerSimulation};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_player_frames).add_systems(
            Update,
            sync_player_sprite
                .after(PlayerSimulation)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Copies pose, frame, and facing from the controller onto the sprite.
/// World y points down, Bevy's up, so y is negated.
fn sync_player_sprite(mut query: Query<(&PlayerBody, &mut Sprite, &mut Transform)>) {
    for (body, mut sprite, mut transform) in &mut query {
        let controller = &body.0;
        let center = controller.bounds().center();
        transform.translation.x = center.x;
        transform.translation.y = -center.y;

        match controller.current_frame() {
            Some(SpriteFrame::Image(handle)) => {
                sprite.image = handle.clone();
                sprite.color = Color::WHITE;
            }
            Some(SpriteFrame::Placeholder(color)) => {
                sprite.image = Handle::default();
                sprite.color = *color;
            }
            None => {}
        }
        sprite.flip_x = controller.flip_x();
    }
}
