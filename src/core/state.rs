//! Core domain: top-level game state.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
    Paused,
    Dead,
}
