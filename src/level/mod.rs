//! Level domain: static platform geometry and its sprites.

mod layout;

pub use layout::{LEVEL_DEATH_Y, Level, create_level};

use bevy::prelude::*;

const PLATFORM_FILL: Color = Color::srgb(0.137, 0.137, 0.196);
const PLATFORM_EDGES: [Color; 3] = [
    Color::srgb(0.314, 0.157, 0.471),
    Color::srgb(0.157, 0.392, 0.588),
    Color::srgb(0.471, 0.235, 0.314),
];
const EDGE_WIDTH: f32 = 2.0;

/// Marker for platform sprites
#[derive(Component, Debug)]
pub struct PlatformSprite;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Level>()
            .insert_resource(ClearColor(Color::srgb(0.012, 0.012, 0.09)))
            .add_systems(Startup, spawn_platform_sprites);
    }
}

/// Platforms never change, so their sprites are spawned once for the app.
fn spawn_platform_sprites(mut commands: Commands, level: Res<Level>) {
    for (index, platform) in level.platforms.iter().enumerate() {
        let center = platform.center();
        let size = Vec2::new(platform.w as f32, platform.h as f32);

        commands.spawn((
            PlatformSprite,
            Sprite {
                color: PLATFORM_EDGES[index % PLATFORM_EDGES.len()],
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, -center.y, 0.0),
        ));
        commands.spawn((
            PlatformSprite,
            Sprite {
                color: PLATFORM_FILL,
                custom_size: Some(size - Vec2::splat(EDGE_WIDTH * 2.0)),
                ..default()
            },
            Transform::from_xyz(center.x, -center.y, 0.1),
        ));
    }

    info!("Level built: {} platforms", level.platforms.len());
}
