//! Effects domain: short-lived particles spawned by player actions.

use bevy::prelude::*;
use rand::Rng;

/// Elapsed time is divided by this so velocities read as pixels per 60 Hz frame.
pub const FRAME_MS: f32 = 16.7;

/// Downward acceleration applied to every particle, per normalized frame.
pub const PARTICLE_GRAVITY: f32 = 0.1;

/// Parameters shared by every particle in one emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    pub count: usize,
    pub color: Color,
    pub size: f32,
    pub speed: f32,
    pub lifetime_ms: f32,
}

impl ParticleBurst {
    /// Grey puffs kicked up while running.
    pub const DUST: ParticleBurst = ParticleBurst {
        count: 3,
        color: Color::srgb(0.706, 0.706, 0.706),
        size: 2.0,
        speed: 1.5,
        lifetime_ms: 400.0,
    };

    /// Gold sparks thrown off by a wall jump.
    pub const SPARKS: ParticleBurst = ParticleBurst {
        count: 6,
        color: Color::srgb(1.0, 0.843, 0.0),
        size: 1.5,
        speed: 2.5,
        lifetime_ms: 300.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub size: f32,
    pub age_ms: f32,
    pub lifetime_ms: f32,
}

impl Particle {
    /// Spawns at `origin` with each velocity axis uniform in `[-speed, speed]`.
    pub fn spawn<R: Rng>(rng: &mut R, origin: Vec2, burst: &ParticleBurst) -> Self {
        let speed = burst.speed.abs();
        Self {
            position: origin,
            velocity: Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            ),
            color: burst.color,
            size: burst.size,
            age_ms: 0.0,
            lifetime_ms: burst.lifetime_ms,
        }
    }

    pub fn advance(&mut self, elapsed_ms: f32) {
        let step = elapsed_ms / FRAME_MS;
        self.position += self.velocity * step;
        self.velocity.y += PARTICLE_GRAVITY * step;
        self.age_ms += elapsed_ms;
    }

    /// A particle whose age has reached its lifetime is gone.
    pub fn is_expired(&self) -> bool {
        self.age_ms >= self.lifetime_ms
    }

    fn life_ratio(&self) -> f32 {
        if self.lifetime_ms <= 0.0 {
            return 1.0;
        }
        (self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }

    /// Opacity in `[0, 1]`, fading linearly with age.
    pub fn alpha(&self) -> f32 {
        1.0 - self.life_ratio()
    }

    /// Draw radius, shrinking linearly with age.
    pub fn radius(&self) -> f32 {
        self.size * (1.0 - self.life_ratio())
    }

    pub fn faded_color(&self) -> Color {
        self.color.with_alpha(self.alpha())
    }
}

pub fn emit_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    burst: &ParticleBurst,
) {
    particles.extend((0..burst.count).map(|_| Particle::spawn(rng, origin, burst)));
}

/// Ages every particle and drops the expired ones. This is the only path that
/// removes particles.
pub fn advance_particles(particles: &mut Vec<Particle>, elapsed_ms: f32) {
    for particle in particles.iter_mut() {
        particle.advance(elapsed_ms);
    }
    particles.retain(|particle| !particle.is_expired());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn still_particle(lifetime_ms: f32) -> Particle {
        Particle {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: Color::WHITE,
            size: 2.0,
            age_ms: 0.0,
            lifetime_ms,
        }
    }

    #[test]
    fn test_particle_at_lifetime_is_removed() {
        let mut particles = vec![still_particle(300.0)];
        advance_particles(&mut particles, 300.0);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_particle_one_tick_short_of_lifetime_is_kept() {
        let mut particles = vec![still_particle(300.0)];
        advance_particles(&mut particles, 299.0);
        assert_eq!(particles.len(), 1);
        assert_eq!(particles[0].age_ms, 299.0);
    }

    #[test]
    fn test_motion_is_normalized_to_sixty_hz() {
        let mut particle = still_particle(1000.0);
        particle.velocity = Vec2::new(2.0, 0.0);

        particle.advance(FRAME_MS);

        assert!((particle.position.x - 2.0).abs() < 1e-5);
        assert!((particle.velocity.y - PARTICLE_GRAVITY).abs() < 1e-5);
    }

    #[test]
    fn test_fade_and_shrink_follow_age() {
        let mut particle = still_particle(400.0);
        particle.size = 2.0;
        particle.age_ms = 100.0;

        assert!((particle.alpha() - 0.75).abs() < 1e-6);
        assert!((particle.radius() - 1.5).abs() < 1e-6);

        particle.age_ms = 500.0;
        assert_eq!(particle.alpha(), 0.0);
        assert_eq!(particle.radius(), 0.0);
    }

    #[test]
    fn test_burst_spawns_within_speed_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut particles = Vec::new();
        let origin = Vec2::new(10.0, 20.0);

        emit_burst(&mut particles, &mut rng, origin, &ParticleBurst::SPARKS);

        assert_eq!(particles.len(), ParticleBurst::SPARKS.count);
        for particle in &particles {
            assert_eq!(particle.position, origin);
            assert!(particle.velocity.x.abs() <= ParticleBurst::SPARKS.speed);
            assert!(particle.velocity.y.abs() <= ParticleBurst::SPARKS.speed);
            assert_eq!(particle.lifetime_ms, 300.0);
        }
    }
}
