//! Error types
//!
//! Only initialization can fail. Once a `Simulation` exists every tick is total.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// Sampling range is empty: the radius does not fit the viewport on this axis
    #[error("invalid sampling range: start {start} must be less than end {end}")]
    InvalidRange { start: i64, end: i64 },
    #[error("viewport extents must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("ball radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("placed {placed} of {requested} balls before giving up after {attempts} attempts")]
    Exhausted {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
