//! Core domain: camera that follows a target box.

use bevy::prelude::*;

use crate::movement::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Center on the target on both axes, never scrolling past the origin.
    Centered,
    /// Track the target horizontally with the view pinned to y = 0.
    #[default]
    HorizontalFollow,
}

/// Top-left corner of the view in world space, plus its size.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub mode: CameraMode,
}

impl FollowCamera {
    pub fn new(width: f32, height: f32, mode: CameraMode) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            mode,
        }
    }

    pub fn update(&mut self, target: &Aabb) {
        let half_width = (self.width / 2.0).floor();
        let half_height = (self.height / 2.0).floor();

        match self.mode {
            CameraMode::Centered => {
                let center_x = (target.x + target.w / 2) as f32;
                let center_y = (target.y + target.h / 2) as f32;
                self.x = (center_x - half_width).max(0.0);
                self.y = (center_y - half_height).max(0.0);
            }
            CameraMode::HorizontalFollow => {
                self.x = target.x as f32 - half_width;
                self.y = 0.0;
            }
        }
    }

    /// Offsets a world-space rect into view space.
    pub fn apply(&self, rect: &Aabb) -> Aabb {
        Aabb::new(
            rect.x - self.x as i32,
            rect.y - self.y as i32,
            rect.w,
            rect.h,
        )
    }

    /// Center of the view in world space.
    pub fn view_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(800.0, 600.0, CameraMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_follow_pins_y() {
        let mut camera = FollowCamera::new(800.0, 600.0, CameraMode::HorizontalFollow);
        camera.update(&Aabb::new(1000, 300, 32, 48));

        assert_eq!(camera.x, 600.0);
        assert_eq!(camera.y, 0.0);
        assert_eq!(
            camera.apply(&Aabb::new(1000, 300, 32, 48)),
            Aabb::new(400, 300, 32, 48)
        );
    }

    #[test]
    fn test_horizontal_follow_can_scroll_left_of_origin() {
        let mut camera = FollowCamera::new(800.0, 600.0, CameraMode::HorizontalFollow);
        camera.update(&Aabb::new(100, 300, 32, 48));
        assert_eq!(camera.x, -300.0);
    }

    #[test]
    fn test_centered_clamps_at_origin() {
        let mut camera = FollowCamera::new(800.0, 600.0, CameraMode::Centered);

        camera.update(&Aabb::new(100, 100, 32, 48));
        assert_eq!((camera.x, camera.y), (0.0, 0.0));

        camera.update(&Aabb::new(1000, 700, 32, 48));
        assert_eq!((camera.x, camera.y), (616.0, 424.0));
        assert_eq!(camera.view_center(), Vec2::new(1016.0, 724.0));
    }
}
