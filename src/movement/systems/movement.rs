//! Movement domain: drives the player controller once per frame.

use bevy::prelude::*;

use crate::level::Level;
use crate::movement::{PlayerBody, PlayerInput};

pub(crate) fn update_player(
    time: Res<Time>,
    input: Res<PlayerInput>,
    level: Res<Level>,
    mut query: Query<&mut PlayerBody>,
) {
    let elapsed_ms = time.delta_secs() * 1000.0;

    for mut body in &mut query {
        body.0.update(&level.platforms, &input, elapsed_ms);
    }
}
