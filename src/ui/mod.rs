//! UI domain: menus, HUD, and the death flow.

mod death;
mod hud_player;
mod menu;
mod pause;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::PlayerSimulation;
use crate::ui::death::{DeathScreenUI, detect_player_death, handle_death_input, spawn_death_screen};
use crate::ui::hud_player::{PlayerHudUI, spawn_player_hud, update_player_hud};
use crate::ui::menu::{
    MainMenuUI, PauseMenuUI, navigate_menu, refresh_menu_highlight, spawn_main_menu,
    spawn_pause_menu,
};
use crate::ui::pause::pause_on_escape;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), despawn_all::<MainMenuUI>)
            .add_systems(OnEnter(GameState::Paused), spawn_pause_menu)
            .add_systems(OnExit(GameState::Paused), despawn_all::<PauseMenuUI>)
            .add_systems(OnEnter(GameState::Playing), spawn_player_hud)
            .add_systems(OnExit(GameState::Playing), despawn_all::<PlayerHudUI>)
            .add_systems(OnEnter(GameState::Dead), spawn_death_screen)
            .add_systems(OnExit(GameState::Dead), despawn_all::<DeathScreenUI>)
            .add_systems(
                Update,
                (navigate_menu, refresh_menu_highlight)
                    .chain()
                    .run_if(in_state(GameState::MainMenu).or(in_state(GameState::Paused))),
            )
            .add_systems(
                Update,
                (
                    detect_player_death.after(PlayerSimulation),
                    update_player_hud.after(PlayerSimulation),
                    pause_on_escape,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Update, handle_death_input.run_if(in_state(GameState::Dead)));
    }
}

fn despawn_all<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
