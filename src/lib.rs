//! Ball Collision - elastic bouncing balls in a rectangular viewport
//!
//! Core modules:
//! - `sim`: Simulation core (bodies, placement, collisions, tick)
//! - `settings`: Construction-time configuration, loadable from JSON
//! - `host`: Seam to the display surface and the per-frame driver
//! - `error`: Error types for configuration and placement

pub mod error;
pub mod host;
pub mod settings;
pub mod sim;

pub use error::{PlacementError, SettingsError};
pub use host::{FrameLoop, FrameOutcome, HeadlessHost, Host};
pub use settings::Settings;
pub use sim::{Body, Simulation};

use glam::DVec2;

/// Simulation defaults
pub mod consts {
    use glam::DVec2;

    /// Number of balls in a run
    pub const BALL_COUNT: usize = 10;
    /// Ball radius in viewport units
    pub const BALL_RADIUS: f64 = 150.0;
    /// Every ball starts moving down-right
    pub const BALL_VELOCITY: DVec2 = DVec2::new(2.0, 2.0);
    /// Velocity added to vy each tick (disabled)
    pub const GRAVITY: f64 = 0.0;
    /// Ball-ball impulse coefficient
    pub const SPRING: f64 = 1.0;
    /// Wall bounce multiplier (perfect reflection)
    pub const RESTITUTION: f64 = -1.0;

    /// Candidate draws before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100_000;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.length(), pos.y.atan2(pos.x))
}
