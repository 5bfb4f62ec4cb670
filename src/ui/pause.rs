//! UI domain: pausing a run.

use bevy::prelude::*;

use crate::core::GameState;

pub(crate) fn pause_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Paused);
        info!("Run paused");
    }
}
