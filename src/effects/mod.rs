//! Effects domain: particle simulation and its on-screen sprites.

mod particles;

pub use particles::{Particle, ParticleBurst, advance_particles, emit_burst};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{PlayerBody, PlayerSimulation};

/// Marker for a sprite drawn for one live particle this frame.
#[derive(Component)]
pub struct ParticleSprite;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            render_particles
                .after(PlayerSimulation)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnEnter(GameState::MainMenu), clear_particle_sprites);
    }
}

/// Particles live inside the controller; redraw them from scratch each frame.
fn render_particles(
    mut commands: Commands,
    bodies: Query<&PlayerBody>,
    existing: Query<Entity, With<ParticleSprite>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for body in &bodies {
        for particle in body.0.particles() {
            let diameter = particle.radius() * 2.0;
            if diameter <= 0.0 {
                continue;
            }

            commands.spawn((
                ParticleSprite,
                Sprite {
                    color: particle.faded_color(),
                    custom_size: Some(Vec2::splat(diameter)),
                    ..default()
                },
                Transform::from_xyz(particle.position.x, -particle.position.y, 20.0),
            ));
        }
    }
}

fn clear_particle_sprites(mut commands: Commands, existing: Query<Entity, With<ParticleSprite>>) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
}
