//! Content domain: data files read at startup.

mod loader;

pub use loader::{ContentLoadError, load_single_file, load_tuning, parse_single, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_movement_tuning);
    }
}

fn load_movement_tuning(mut commands: Commands) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!(
                "Loaded movement tuning: max_speed={}, jump_power={}, max_jumps={}",
                tuning.max_speed, tuning.jump_power, tuning.max_jumps
            );
            tuning
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            MovementTuning::default()
        }
    };
    commands.insert_resource(tuning);
}
