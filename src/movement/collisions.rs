//! Movement domain: axis-separated collision resolution against static platforms.
//!
//! All coordinates are screen-space with +y pointing down, so a falling body has
//! a positive vertical velocity.

use bevy::prelude::*;

use crate::movement::WallContact;

/// Integer axis-aligned rectangle used for the player box and level platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Midpoint of the bottom edge, where feet touch the ground.
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.x as f32 + self.w as f32 / 2.0, self.bottom() as f32)
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Float position and velocity plus the integer box that mirrors the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub bounds: Aabb,
}

impl Body {
    pub fn new(position: Vec2, width: i32, height: i32) -> Self {
        let mut body = Self {
            position,
            velocity: Vec2::ZERO,
            bounds: Aabb::new(0, 0, width, height),
        };
        body.snap_bounds();
        body
    }

    /// Truncates the float position into the box.
    pub fn snap_bounds(&mut self) {
        self.bounds.x = self.position.x as i32;
        self.bounds.y = self.position.y as i32;
    }
}

/// Contact flags reported after a full move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub grounded: bool,
    pub wall: WallContact,
}

/// Moves the body horizontally, then vertically, then probes for walls.
/// Walls are only probed while airborne.
pub fn move_and_collide(body: &mut Body, platforms: &[Aabb]) -> Contacts {
    resolve_horizontal(body, platforms);
    let grounded = resolve_vertical(body, platforms);

    let wall = if grounded {
        WallContact::None
    } else {
        probe_wall(&body.bounds, platforms)
    };

    Contacts { grounded, wall }
}

/// Applies horizontal velocity and pushes the box out of any overlapped platform.
///
/// The first overlapping platform in iteration order resolves the motion and
/// zeroes the velocity, so later overlaps only re-sync the position.
pub fn resolve_horizontal(body: &mut Body, platforms: &[Aabb]) {
    body.position.x += body.velocity.x;
    body.snap_bounds();

    for platform in platforms {
        if !body.bounds.overlaps(platform) {
            continue;
        }

        if body.velocity.x > 0.0 {
            body.bounds.set_right(platform.left());
        } else if body.velocity.x < 0.0 {
            body.bounds.set_left(platform.right());
        }
        body.position.x = body.bounds.x as f32;
        body.velocity.x = 0.0;
    }
}

/// Applies vertical velocity and resolves overlaps. Returns whether the body
/// ended the pass supported by a platform top.
///
/// Only the first overlapping platform in iteration order pushes the box.
pub fn resolve_vertical(body: &mut Body, platforms: &[Aabb]) -> bool {
    let rising = body.velocity.y < 0.0;
    body.position.y += body.velocity.y;
    body.snap_bounds();

    let mut grounded = false;
    if let Some(platform) = platforms.iter().find(|platform| body.bounds.overlaps(platform)) {
        if rising {
            body.bounds.set_top(platform.bottom());
        } else {
            body.bounds.set_bottom(platform.top());
            grounded = true;
        }
        body.position.y = body.bounds.y as f32;
        body.velocity.y = 0.0;
    }

    // Sub-pixel gravity does not move the truncated box, so a body standing on
    // a platform needs a contact probe to stay grounded.
    if !grounded && !rising && touching_below(&body.bounds, platforms) {
        grounded = true;
        body.position.y = body.bounds.y as f32;
        body.velocity.y = 0.0;
    }

    grounded
}

fn touching_below(bounds: &Aabb, platforms: &[Aabb]) -> bool {
    let strip = Aabb::new(bounds.left(), bounds.bottom(), bounds.w, 1);
    platforms.iter().any(|platform| strip.overlaps(platform))
}

/// Checks a one-unit strip on each side of the box, left first.
pub fn probe_wall(bounds: &Aabb, platforms: &[Aabb]) -> WallContact {
    let left = Aabb::new(bounds.left() - 1, bounds.top(), 1, bounds.h);
    let right = Aabb::new(bounds.right(), bounds.top(), 1, bounds.h);

    if platforms.iter().any(|platform| left.overlaps(platform)) {
        WallContact::Left
    } else if platforms.iter().any(|platform| right.overlaps(platform)) {
        WallContact::Right
    } else {
        WallContact::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32, velocity: Vec2) -> Body {
        let mut body = Body::new(Vec2::new(x, y), 32, 48);
        body.velocity = velocity;
        body
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let a = Aabb::new(0, 0, 10, 10);
        let b = Aabb::new(10, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Aabb::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_moving_right_snaps_to_platform_left_edge() {
        let wall = Aabb::new(100, 0, 20, 200);
        let mut body = body_at(60.0, 50.0, Vec2::new(12.0, 0.0));

        resolve_horizontal(&mut body, &[wall]);

        assert_eq!(body.bounds.right(), 100);
        assert_eq!(body.position.x, 68.0);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_moving_left_snaps_to_platform_right_edge() {
        let wall = Aabb::new(0, 0, 20, 200);
        let mut body = body_at(25.0, 50.0, Vec2::new(-8.0, 0.0));

        resolve_horizontal(&mut body, &[wall]);

        assert_eq!(body.bounds.left(), 20);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_falling_onto_platform_grounds() {
        let floor = Aabb::new(0, 100, 200, 20);
        let mut body = body_at(10.0, 45.0, Vec2::new(0.0, 10.0));

        let grounded = resolve_vertical(&mut body, &[floor]);

        assert!(grounded);
        assert_eq!(body.bounds.bottom(), 100);
        assert_eq!(body.position.y, 52.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_rising_into_ceiling_does_not_ground() {
        let ceiling = Aabb::new(0, 0, 200, 20);
        let mut body = body_at(10.0, 25.0, Vec2::new(0.0, -10.0));

        let grounded = resolve_vertical(&mut body, &[ceiling]);

        assert!(!grounded);
        assert_eq!(body.bounds.top(), 20);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_resting_contact_keeps_body_grounded() {
        let floor = Aabb::new(0, 100, 200, 20);
        let mut body = body_at(10.0, 52.0, Vec2::new(0.0, 0.8));

        let grounded = resolve_vertical(&mut body, &[floor]);

        assert!(grounded);
        assert_eq!(body.bounds.bottom(), 100);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position.y, 52.0);
    }

    #[test]
    fn test_first_platform_wins_on_double_overlap() {
        let first = Aabb::new(100, 0, 20, 200);
        let second = Aabb::new(95, 0, 20, 200);
        let mut body = body_at(60.0, 50.0, Vec2::new(12.0, 0.0));

        resolve_horizontal(&mut body, &[first, second]);

        // The second overlap no longer pushes because velocity is already zero.
        assert_eq!(body.bounds.right(), 100);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_ceiling_hit_with_ledge_below_is_not_a_landing() {
        let ceiling = Aabb::new(0, 0, 200, 50);
        let ledge = Aabb::new(0, 80, 200, 20);
        let mut body = body_at(60.0, 60.0, Vec2::new(0.0, -12.0));

        let grounded = resolve_vertical(&mut body, &[ceiling, ledge]);

        assert!(!grounded);
        assert_eq!(body.bounds.top(), 50);
        assert_eq!(body.position.y, 50.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_first_platform_wins_when_falling_into_two() {
        let first = Aabb::new(0, 100, 200, 20);
        let second = Aabb::new(0, 90, 200, 20);
        let mut body = body_at(60.0, 50.0, Vec2::new(0.0, 12.0));

        let grounded = resolve_vertical(&mut body, &[first, second]);

        assert!(grounded);
        assert_eq!(body.bounds.bottom(), 100);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_wall_probe_sides() {
        let bounds = Aabb::new(50, 50, 32, 48);
        let left_wall = Aabb::new(30, 0, 20, 200);
        let right_wall = Aabb::new(82, 0, 20, 200);

        assert_eq!(probe_wall(&bounds, &[left_wall]), WallContact::Left);
        assert_eq!(probe_wall(&bounds, &[right_wall]), WallContact::Right);
        assert_eq!(
            probe_wall(&bounds, &[left_wall, right_wall]),
            WallContact::Left
        );
        assert_eq!(probe_wall(&bounds, &[]), WallContact::None);
    }

    #[test]
    fn test_grounded_move_skips_wall_probe() {
        let floor = Aabb::new(0, 100, 200, 20);
        let wall = Aabb::new(82, 0, 20, 100);
        let mut body = body_at(50.0, 52.0, Vec2::new(0.0, 1.0));

        let contacts = move_and_collide(&mut body, &[floor, wall]);

        assert!(contacts.grounded);
        assert_eq!(contacts.wall, WallContact::None);
    }
}
