//! Level domain: the rooftop layout.

use bevy::prelude::*;

use crate::movement::Aabb;

/// A player whose box top passes this line has fallen out of the level.
pub const LEVEL_DEATH_Y: i32 = 800;

/// Builds the fixed platform set: rooftop ground, balconies, towers, and
/// wall-jump ledges.
pub fn create_level() -> Vec<Aabb> {
    vec![
        // Rooftop ground
        Aabb::new(0, 540, 1600, 60),
        // Balconies
        Aabb::new(200, 460, 180, 30),
        Aabb::new(500, 400, 200, 30),
        Aabb::new(850, 340, 220, 30),
        Aabb::new(1200, 420, 180, 30),
        // Towers
        Aabb::new(150, 200, 50, 340),
        Aabb::new(1400, 150, 50, 390),
        // Wall-jump ledges
        Aabb::new(200, 400, 70, 25),
        Aabb::new(1330, 360, 70, 25),
        // Upper steps
        Aabb::new(380, 320, 100, 25),
        Aabb::new(700, 260, 120, 25),
        Aabb::new(1000, 280, 100, 25),
    ]
}

/// Immutable collision geometry for the current level.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Aabb>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            platforms: create_level(),
        }
    }
}

impl Level {
    /// The ground slab: lowest platform that is both wide and thick.
    pub fn ground(&self) -> Option<&Aabb> {
        self.platforms
            .iter()
            .filter(|platform| platform.w > 100 && platform.h > 50)
            .max_by_key(|platform| platform.y)
    }

    /// Horizontal extent `(min_x, max_x)` of all platforms.
    pub fn horizontal_extent(&self) -> (i32, i32) {
        let min_x = self.platforms.iter().map(Aabb::left).min().unwrap_or(0);
        let max_x = self.platforms.iter().map(Aabb::right).max().unwrap_or(0);
        (min_x, max_x)
    }

    /// Top-left corner for a player box standing mid-level on the ground.
    pub fn spawn_point(&self, body_height: i32) -> Vec2 {
        let (min_x, max_x) = self.horizontal_extent();
        let ground_top = self.ground().map(Aabb::top).unwrap_or(0);
        Vec2::new(((min_x + max_x) / 2) as f32, (ground_top - body_height) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::MovementTuning;

    #[test]
    fn test_ground_is_the_rooftop_slab() {
        let level = Level::default();
        assert_eq!(level.ground(), Some(&Aabb::new(0, 540, 1600, 60)));
        assert_eq!(level.horizontal_extent(), (0, 1600));
    }

    #[test]
    fn test_spawn_point_rests_on_ground_clear_of_platforms() {
        let level = Level::default();
        let tuning = MovementTuning::default();
        let spawn = level.spawn_point(tuning.body_height);
        assert_eq!(spawn, Vec2::new(800.0, 492.0));

        let body = Aabb::new(
            spawn.x as i32,
            spawn.y as i32,
            tuning.body_width,
            tuning.body_height,
        );
        assert!(level.platforms.iter().all(|platform| !body.overlaps(platform)));
    }

    #[test]
    fn test_balconies_are_within_jump_reach() {
        let level = Level::default();
        let reach = MovementTuning::default().max_reachable_height();
        let ground_top = level.ground().map(Aabb::top).unwrap_or_default();

        // Balconies are the 30 px slabs; higher steps are reached from them.
        for platform in level.platforms.iter().filter(|p| p.h == 30) {
            let rise = (ground_top - platform.top()) as f32;
            assert!(rise <= reach, "platform {platform:?} rises {rise}");
        }
    }

    #[test]
    fn test_empty_level_spawn_is_total() {
        let level = Level {
            platforms: Vec::new(),
        };
        assert_eq!(level.spawn_point(48), Vec2::new(0.0, -48.0));
    }
}
