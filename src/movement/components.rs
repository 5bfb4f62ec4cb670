//! Movement domain: components and state types for locomotion.

use bevy::prelude::*;

use crate::movement::PlayerController;
use crate::sprites::{SpriteFrame, VisualState};

#[derive(Component, Debug)]
pub struct Player;

/// The player's simulation core, rendered from each frame.
#[derive(Component)]
pub struct PlayerBody(pub PlayerController<SpriteFrame>);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub wall: WallContact,
    pub facing: Facing,
    pub jump_count: u8,
    pub jump_held: bool,
    /// Controller clock reading when the current jump started.
    pub jump_start_ms: f64,
    pub dash: DashState,
    pub visual: VisualState,
}

impl MovementState {
    pub fn on_wall(&self) -> bool {
        self.wall != WallContact::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashState {
    pub active: bool,
    pub remaining_ticks: u32,
    pub cooldown_ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

impl WallContact {
    /// -1 for a wall on the left, 1 on the right, 0 without contact.
    pub fn sign(self) -> f32 {
        match self {
            WallContact::None => 0.0,
            WallContact::Left => -1.0,
            WallContact::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Hit points clamped to `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn percent(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}
