//! Movement domain: the per-frame player state machine.
//!
//! One `update` call is one tick. Steps run in a fixed order: horizontal
//! intent, jump, dash, gravity, collision, wall interaction, facing, visual
//! state, dust, particle aging.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::effects::{Particle, ParticleBurst, advance_particles, emit_burst};
use crate::movement::collisions::{self, Aabb, Body, Contacts};
use crate::movement::{
    Facing, Health, MovementState, MovementTuning, PlayerInput, WallContact,
};
use crate::sprites::{AnimationSet, VisualState};

/// Picks the visual state from physical state. Earlier rules win.
pub fn derive_visual_state(on_wall: bool, dashing: bool, velocity: Vec2) -> VisualState {
    if on_wall {
        if velocity.y.abs() > 0.1 {
            VisualState::Climb
        } else {
            VisualState::WallSlide
        }
    } else if dashing {
        VisualState::Roll
    } else if velocity.y < 0.0 {
        VisualState::Jump
    } else if velocity.y > 0.1 {
        VisualState::Fall
    } else if velocity.x.abs() > 0.5 {
        VisualState::Run
    } else {
        VisualState::Idle
    }
}

pub struct PlayerController<F, R = ChaCha8Rng> {
    tuning: MovementTuning,
    body: Body,
    state: MovementState,
    health: Health,
    animations: AnimationSet<F>,
    particles: Vec<Particle>,
    rng: R,
    /// Sum of every elapsed time passed to `update`.
    clock_ms: f64,
}

impl<F> PlayerController<F, ChaCha8Rng> {
    pub fn seeded(
        spawn: Vec2,
        tuning: MovementTuning,
        animations: AnimationSet<F>,
        seed: u64,
    ) -> Self {
        Self::new(spawn, tuning, animations, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<F, R: Rng> PlayerController<F, R> {
    pub fn new(spawn: Vec2, tuning: MovementTuning, animations: AnimationSet<F>, rng: R) -> Self {
        let body = Body::new(spawn, tuning.body_width, tuning.body_height);
        Self {
            tuning,
            body,
            state: MovementState::default(),
            health: Health::default(),
            animations,
            particles: Vec::new(),
            rng,
            clock_ms: 0.0,
        }
    }

    /// Advances the player by one tick against the given static geometry.
    pub fn update(&mut self, platforms: &[Aabb], input: &PlayerInput, elapsed_ms: f32) {
        self.clock_ms += f64::from(elapsed_ms);
        let was_grounded = self.state.grounded;

        self.apply_horizontal_intent(input);
        self.apply_jump(input);
        self.apply_dash(input);
        self.apply_gravity();

        let contacts = collisions::move_and_collide(&mut self.body, platforms);
        self.apply_contacts(contacts);

        self.apply_wall_interaction(input);
        self.update_facing();
        self.update_visual_state(elapsed_ms);

        if self.state.visual == VisualState::Run && self.state.grounded && was_grounded {
            self.emit_dust();
        }

        advance_particles(&mut self.particles, elapsed_ms);
    }

    pub(crate) fn apply_horizontal_intent(&mut self, input: &PlayerInput) {
        if self.state.dash.active {
            return;
        }

        let mut target = 0.0;
        if input.left {
            target = -self.tuning.max_speed;
        }
        if input.right {
            target = self.tuning.max_speed;
        }

        let velocity = &mut self.body.velocity;
        velocity.x += (target - velocity.x) * self.tuning.acceleration;
    }

    pub(crate) fn apply_jump(&mut self, input: &PlayerInput) {
        if !input.jump {
            self.release_jump();
            return;
        }

        if self.state.jump_held {
            return;
        }

        if self.state.grounded {
            self.state.jump_count = 1;
            self.body.velocity.y = self.tuning.jump_power;
            self.state.grounded = false;
            self.start_jump();
            debug!("Ground jump: jump_count={}", self.state.jump_count);
        } else if self.state.jump_count < self.tuning.max_jumps {
            self.state.jump_count += 1;
            self.body.velocity.y = self.tuning.jump_power * self.tuning.air_jump_multiplier;
            self.start_jump();
            debug!("Air jump: jump_count={}", self.state.jump_count);
        }
    }

    fn start_jump(&mut self) {
        self.state.jump_held = true;
        self.state.jump_start_ms = self.clock_ms;
    }

    /// Cuts upward velocity short when the button is let go early.
    fn release_jump(&mut self) {
        if self.state.jump_held && self.body.velocity.y < 0.0 {
            let held_secs = ((self.clock_ms - self.state.jump_start_ms) / 1000.0) as f32;
            if held_secs < self.tuning.max_jump_hold_time {
                self.body.velocity.y *= held_secs / self.tuning.max_jump_hold_time;
            }
        }
        self.state.jump_held = false;
    }

    pub(crate) fn apply_dash(&mut self, input: &PlayerInput) {
        let dash = &mut self.state.dash;
        dash.cooldown_ticks = dash.cooldown_ticks.saturating_sub(1);

        if dash.active {
            dash.remaining_ticks = dash.remaining_ticks.saturating_sub(1);
            if dash.remaining_ticks == 0 {
                dash.active = false;
                self.body.velocity.x *= self.tuning.dash_end_damping;
                debug!("Dash ended: vel_x={}", self.body.velocity.x);
            }
        } else if input.dash && dash.cooldown_ticks == 0 {
            let direction = if self.body.velocity.x > 0.0 {
                1.0
            } else if self.body.velocity.x < 0.0 {
                -1.0
            } else {
                self.state.facing.sign()
            };

            self.body.velocity.x = direction * self.tuning.dash_speed;
            dash.active = true;
            dash.remaining_ticks = self.tuning.dash_duration_ticks;
            dash.cooldown_ticks = self.tuning.dash_cooldown_ticks;
            debug!("Dash started: direction={}", direction);
        }
    }

    pub(crate) fn apply_gravity(&mut self) {
        if !self.state.dash.active {
            self.body.velocity.y += self.tuning.gravity;
        }
        self.body.velocity.y = self.body.velocity.y.min(self.tuning.max_fall_speed);
    }

    fn apply_contacts(&mut self, contacts: Contacts) {
        self.state.grounded = contacts.grounded;
        if contacts.grounded {
            if self.state.jump_count != 0 {
                debug!("Landed: jump_count reset from {}", self.state.jump_count);
            }
            self.state.jump_count = 0;
        }
        self.state.wall = contacts.wall;
    }

    pub(crate) fn apply_wall_interaction(&mut self, input: &PlayerInput) {
        if !self.state.on_wall() {
            return;
        }

        if input.up {
            self.body.velocity.y = -self.tuning.climb_speed;
        } else if input.down {
            self.body.velocity.y = self.tuning.climb_speed;
        } else {
            self.body.velocity.y = self.body.velocity.y.max(0.0);
        }

        if input.jump && !self.state.jump_held {
            let wall = self.state.wall;
            self.body.velocity.y = self.tuning.jump_power * self.tuning.wall_jump_multiplier;
            self.body.velocity.x = -wall.sign() * self.tuning.wall_jump_kick;
            self.state.wall = WallContact::None;
            self.state.jump_count = 1;
            self.start_jump();

            let center = self.body.bounds.center();
            emit_burst(&mut self.particles, &mut self.rng, center, &ParticleBurst::SPARKS);
            debug!("Wall jump off {:?}: vel_x={}", wall, self.body.velocity.x);
        }
    }

    fn update_facing(&mut self) {
        if self.body.velocity.x > 0.0 {
            self.state.facing = Facing::Right;
        } else if self.body.velocity.x < 0.0 {
            self.state.facing = Facing::Left;
        }
    }

    fn update_visual_state(&mut self, elapsed_ms: f32) {
        let next = derive_visual_state(
            self.state.on_wall(),
            self.state.dash.active,
            self.body.velocity,
        );

        if next != self.state.visual {
            self.state.visual = next;
            self.animations.get_mut(next).reset();
        }
        self.animations.get_mut(next).advance(elapsed_ms);
    }

    fn emit_dust(&mut self) {
        if self.rng.random::<f32>() < self.tuning.dust_chance {
            let feet = self.body.bounds.bottom_center();
            emit_burst(&mut self.particles, &mut self.rng, feet, &ParticleBurst::DUST);
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health.take_damage(amount)
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        self.health.heal(amount)
    }
}

impl<F, R> PlayerController<F, R> {
    pub fn bounds(&self) -> Aabb {
        self.body.bounds
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn visual_state(&self) -> VisualState {
        self.state.visual
    }

    pub fn current_frame(&self) -> Option<&F> {
        self.animations.get(self.state.visual).current_frame()
    }

    /// Sprites face right; mirror them when facing left.
    pub fn flip_x(&self) -> bool {
        self.state.facing == Facing::Left
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn is_on_wall(&self) -> bool {
        self.state.on_wall()
    }

    pub fn wall_side(&self) -> WallContact {
        self.state.wall
    }

    pub fn is_dashing(&self) -> bool {
        self.state.dash.active
    }

    pub fn dash_cooldown(&self) -> u32 {
        self.state.dash.cooldown_ticks
    }

    pub fn jump_count(&self) -> u8 {
        self.state.jump_count
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    /// True once the top of the box has dropped past `limit_y`.
    pub fn fell_below(&self, limit_y: i32) -> bool {
        self.body.bounds.top() > limit_y
    }
}
