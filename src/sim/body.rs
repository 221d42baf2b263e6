//! A single ball and its per-tick motion
//!
//! Coordinates are screen coordinates: +x to the right, +y downward.
//! Velocities are viewport units per frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One simulated ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center
    pub pos: DVec2,
    pub vel: DVec2,
    /// Fixed after construction, always > 0
    pub radius: f64,
    /// Added to vel.y every tick
    pub gravity: f64,
    /// Multiplier for the velocity component hitting a wall
    pub restitution: f64,
    /// Impulse coefficient, only read when this body is the first of a colliding pair
    pub spring: f64,
}

impl Body {
    pub fn new(radius: f64, pos: DVec2) -> Self {
        Self {
            pos,
            vel: BALL_VELOCITY,
            radius,
            gravity: GRAVITY,
            restitution: RESTITUTION,
            spring: SPRING,
        }
    }

    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.vel = vel;
        self
    }

    /// Advance one tick: apply gravity, then move by velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.vel.y += self.gravity;
        self.pos += self.vel;
    }

    /// Clamp back inside the viewport and bounce off any edge that was crossed.
    ///
    /// Edges are checked right, left, bottom, top. When the viewport is smaller
    /// than the ball's diameter both edges of an axis fire and the later one wins.
    pub fn reflect_at_bounds(&mut self, width: f64, height: f64) {
        if self.pos.x + self.radius > width {
            self.pos.x = width - self.radius;
            self.vel.x *= self.restitution;
        }
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x *= self.restitution;
        }
        if self.pos.y + self.radius > height {
            self.pos.y = height - self.radius;
            self.vel.y *= self.restitution;
        }
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y *= self.restitution;
        }
    }

    /// True if a circle at `center` with `radius` overlaps this ball.
    /// Tangent circles do not overlap.
    #[inline]
    pub fn overlaps_circle(&self, center: DVec2, radius: f64) -> bool {
        self.radius + radius > self.pos.distance(center)
    }

    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.overlaps_circle(other.pos, other.radius)
    }

    /// Whether the whole circle lies inside `[0, width] x [0, height]`
    pub fn is_contained(&self, width: f64, height: f64) -> bool {
        self.pos.x >= self.radius
            && self.pos.x <= width - self.radius
            && self.pos.y >= self.radius
            && self.pos.y <= height - self.radius
    }

    /// Destination square for drawing a bitmap over the ball (min, max corners)
    pub fn bounding_box(&self) -> (DVec2, DVec2) {
        let r = DVec2::splat(self.radius);
        (self.pos - r, self.pos + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let body = Body::new(10.0, DVec2::new(50.0, 60.0));
        assert_eq!(body.vel, DVec2::new(2.0, 2.0));
        assert_eq!(body.restitution, -1.0);
        assert_eq!(body.spring, 1.0);
        assert_eq!(body.gravity, 0.0);
    }

    #[test]
    fn test_integrate_applies_gravity_first() {
        let mut body = Body::new(5.0, DVec2::new(10.0, 10.0)).with_velocity(DVec2::new(1.0, 0.0));
        body.gravity = 0.5;
        body.integrate();
        assert_eq!(body.vel, DVec2::new(1.0, 0.5));
        assert_eq!(body.pos, DVec2::new(11.0, 10.5));
    }

    #[test]
    fn test_right_wall_bounce() {
        // 800x600 viewport, radius 150, heading right past the edge
        let mut body =
            Body::new(150.0, DVec2::new(790.0, 300.0)).with_velocity(DVec2::new(2.0, 0.0));
        body.integrate();
        body.reflect_at_bounds(800.0, 600.0);
        assert_eq!(body.pos.x, 650.0);
        assert_eq!(body.vel.x, -2.0);
        assert_eq!(body.pos.y, 300.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_left_and_top_bounce() {
        let mut body = Body::new(10.0, DVec2::new(4.0, 3.0)).with_velocity(DVec2::new(-3.0, -1.0));
        body.reflect_at_bounds(100.0, 100.0);
        assert_eq!(body.pos, DVec2::new(10.0, 10.0));
        assert_eq!(body.vel, DVec2::new(3.0, 1.0));
    }

    #[test]
    fn test_partial_restitution() {
        let mut body = Body::new(10.0, DVec2::new(50.0, 95.0)).with_velocity(DVec2::new(0.0, 4.0));
        body.restitution = -0.5;
        body.reflect_at_bounds(100.0, 100.0);
        assert_eq!(body.pos.y, 90.0);
        assert_eq!(body.vel.y, -2.0);
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut body = Body::new(10.0, DVec2::new(50.0, 50.0));
        let before = body.clone();
        body.reflect_at_bounds(100.0, 100.0);
        assert_eq!(body, before);
    }

    #[test]
    fn test_tangent_to_wall_is_untouched() {
        let mut body = Body::new(10.0, DVec2::new(90.0, 10.0)).with_velocity(DVec2::new(1.0, -1.0));
        body.reflect_at_bounds(100.0, 100.0);
        assert_eq!(body.vel, DVec2::new(1.0, -1.0));
    }

    #[test]
    fn test_narrow_viewport_left_edge_wins() {
        // Diameter 20 in a 15-wide viewport: right clamp to 5, then left clamp to 10
        let mut body = Body::new(10.0, DVec2::new(12.0, 50.0)).with_velocity(DVec2::new(1.0, 0.0));
        body.reflect_at_bounds(15.0, 100.0);
        assert_eq!(body.pos.x, 10.0);
        // Reflected twice
        assert_eq!(body.vel.x, 1.0);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Body::new(10.0, DVec2::new(0.0, 0.0));
        let tangent = Body::new(10.0, DVec2::new(20.0, 0.0));
        let close = Body::new(10.0, DVec2::new(15.0, 0.0));
        assert!(!a.overlaps(&tangent));
        assert!(a.overlaps(&close));
        assert!(close.overlaps(&a));
    }

    #[test]
    fn test_bounding_box() {
        let body = Body::new(150.0, DVec2::new(200.0, 300.0));
        let (min, max) = body.bounding_box();
        assert_eq!(min, DVec2::new(50.0, 150.0));
        assert_eq!(max, DVec2::new(350.0, 450.0));
    }
}
