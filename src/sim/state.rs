//! Simulation state
//!
//! The simulation is the single owner of the ball list. Renderers get a
//! read-only view between ticks.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::body::Body;
use super::placement::place_bodies;
use crate::error::PlacementError;
use crate::settings::Settings;

/// All balls plus the viewport they bounce in.
///
/// Serialize-only: every instance comes from a constructor that checks the
/// viewport and the radii.
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    /// Sequence order is collision resolution order
    bodies: Vec<Body>,
    target_count: usize,
    /// Viewport width and height
    extent: DVec2,
    /// Seed the layout was drawn from (None for externally built populations)
    seed: Option<u64>,
    /// Ticks run so far
    time_ticks: u64,
}

impl Simulation {
    /// Place `settings.ball_count` balls in a `width` x `height` viewport
    pub fn new(settings: &Settings, width: f64, height: f64) -> Result<Self, PlacementError> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut bodies = place_bodies(
            &mut rng,
            width,
            height,
            settings.ball_count,
            settings.radius,
            settings.max_placement_attempts,
        )?;
        for body in &mut bodies {
            settings.apply_material(body);
        }

        log::info!(
            "Simulation ready: {} balls (r={}) in {}x{}, seed {}",
            bodies.len(),
            settings.radius,
            width,
            height,
            seed
        );

        Ok(Self {
            target_count: bodies.len(),
            bodies,
            extent: DVec2::new(width, height),
            seed: Some(seed),
            time_ticks: 0,
        })
    }

    /// Wrap a population built elsewhere, e.g. balls with mixed radii.
    /// Every radius must be positive and finite.
    pub fn from_bodies(
        bodies: Vec<Body>,
        width: f64,
        height: f64,
    ) -> Result<Self, PlacementError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlacementError::InvalidViewport { width, height });
        }
        if let Some(body) = bodies.iter().find(|b| !(b.radius.is_finite() && b.radius > 0.0)) {
            return Err(PlacementError::InvalidRadius(body.radius));
        }

        Ok(Self {
            target_count: bodies.len(),
            bodies,
            extent: DVec2::new(width, height),
            seed: None,
            time_ticks: 0,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Current (width, height)
    pub fn bounds(&self) -> (f64, f64) {
        (self.extent.x, self.extent.y)
    }

    /// Follow a resized viewport. Takes effect at the next boundary pass.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        let extent = DVec2::new(width, height);
        if extent != self.extent {
            log::debug!(
                "Viewport resized {}x{} -> {}x{}",
                self.extent.x,
                self.extent.y,
                width,
                height
            );
            self.extent = extent;
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub(crate) fn advance_clock(&mut self) {
        self.time_ticks += 1;
    }

    /// Run one physics step; see [`super::tick::tick`]
    pub fn tick(&mut self) {
        super::tick::tick(self);
    }
}

impl<'a> IntoIterator for &'a Simulation {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
