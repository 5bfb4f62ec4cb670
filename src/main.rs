mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod level;
mod movement;
mod sprites;
mod ui;

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Neon Rooftops".to_string(),
            resolution: WindowResolution::new(800, 600),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        level::LevelPlugin,
        sprites::SpritesPlugin,
        movement::MovementPlugin,
        effects::EffectsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
