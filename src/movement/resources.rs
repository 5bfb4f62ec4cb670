//! Movement domain: tuning and input resources.
//!
//! Velocities are in pixels per tick and durations in ticks unless a field
//! name says otherwise; the simulation advances one step per update call.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub body_width: i32,
    pub body_height: i32,
    /// Fraction of the gap to the target speed closed each tick.
    pub acceleration: f32,
    pub max_speed: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    /// Negative: up is -y.
    pub jump_power: f32,
    pub air_jump_multiplier: f32,
    pub max_jump_hold_time: f32,
    /// Total jumps before landing, the ground jump included.
    pub max_jumps: u8,
    pub dash_speed: f32,
    pub dash_duration_ticks: u32,
    pub dash_cooldown_ticks: u32,
    pub dash_end_damping: f32,
    pub climb_speed: f32,
    pub wall_jump_multiplier: f32,
    pub wall_jump_kick: f32,
    pub dust_chance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            body_width: 32,
            body_height: 48,
            acceleration: 0.6,
            max_speed: 7.0,
            gravity: 0.8,
            max_fall_speed: 12.0,
            jump_power: -15.0,
            air_jump_multiplier: 0.9,
            max_jump_hold_time: 0.3,
            max_jumps: 2,
            dash_speed: 12.0,
            dash_duration_ticks: 8,
            dash_cooldown_ticks: 60,
            dash_end_damping: 0.7,
            climb_speed: 2.0,
            wall_jump_multiplier: 0.8,
            wall_jump_kick: 8.0,
            dust_chance: 0.3,
        }
    }
}

impl MovementTuning {
    /// Apex height of a full ground jump, summing per-tick displacement.
    pub fn single_jump_height(&self) -> f32 {
        Self::apex_height(-self.jump_power, self.gravity)
    }

    /// Height reachable by chaining every available jump at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        let air_jumps = self.max_jumps.saturating_sub(1) as f32;
        let air_height =
            Self::apex_height(-self.jump_power * self.air_jump_multiplier, self.gravity);
        self.single_jump_height() + air_jumps * air_height
    }

    fn apex_height(launch_speed: f32, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        let mut speed = launch_speed - gravity;
        let mut height = 0.0;
        while speed > 0.0 {
            height += speed;
            speed -= gravity;
        }
        height
    }
}

/// Immutable per-frame snapshot of the pressed controls.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub dash: bool,
}
