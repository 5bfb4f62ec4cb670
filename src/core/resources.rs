//! Core domain: shared resources for the current run.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    /// Seeds the player's particle RNG.
    pub seed: u64,
    /// Seconds spent in play this run, shown on the HUD.
    pub elapsed_secs: f32,
    /// Set by the menu and death screen so entering play starts a fresh run
    /// instead of resuming.
    pub restart_requested: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            elapsed_secs: 0.0,
            restart_requested: true,
        }
    }
}

impl RunConfig {
    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }
}
