//! Simulation settings
//!
//! Read once when the simulation is built. Every field has a default, so a
//! JSON file only needs the keys it wants to change.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::Body;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of balls
    pub ball_count: usize,
    /// Radius of every ball, in viewport units
    pub radius: f64,

    // === Per-ball material ===
    /// Velocity every ball starts with (units per frame)
    pub initial_velocity: DVec2,
    pub gravity: f64,
    pub spring: f64,
    pub restitution: f64,

    // === Placement ===
    /// Fixed seed for reproducible layouts; a fresh one is drawn when unset
    pub seed: Option<u64>,
    /// Candidate draws before placement reports failure
    pub max_placement_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            radius: BALL_RADIUS,

            initial_velocity: BALL_VELOCITY,
            gravity: GRAVITY,
            spring: SPRING,
            restitution: RESTITUTION,

            seed: None,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values no viewport could ever satisfy
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if self.max_placement_attempts == 0 {
            return Err(SettingsError::Invalid(
                "max_placement_attempts must be at least 1".into(),
            ));
        }
        let material = [
            ("gravity", self.gravity),
            ("spring", self.spring),
            ("restitution", self.restitution),
            ("initial_velocity.x", self.initial_velocity.x),
            ("initial_velocity.y", self.initial_velocity.y),
        ];
        if let Some((name, value)) = material.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "{name} must be finite, got {value}"
            )));
        }
        Ok(())
    }

    /// Copy the configured material and starting velocity onto a placed ball
    pub fn apply_material(&self, body: &mut Body) {
        body.vel = self.initial_velocity;
        body.gravity = self.gravity;
        body.spring = self.spring;
        body.restitution = self.restitution;
    }
}
