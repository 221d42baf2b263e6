//! Initial non-overlapping placement
//!
//! Centers are drawn on integer coordinates inside the region where a ball of
//! the given radius fits, and rejected while they overlap an accepted ball.
//! The number of draws is capped so an overcrowded viewport reports an error
//! instead of spinning forever.

use glam::DVec2;
use rand::Rng;

use super::body::Body;
use crate::error::PlacementError;

/// Uniform integer in `[start, end]`. Requires `start < end`.
pub fn random_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: i64,
    end: i64,
) -> Result<i64, PlacementError> {
    if start >= end {
        return Err(PlacementError::InvalidRange { start, end });
    }
    Ok(rng.random_range(start..=end))
}

/// Integer sampling range for a center on an axis of length `extent`
fn axis_range(extent: f64, radius: f64) -> (i64, i64) {
    (radius.ceil() as i64, (extent - radius).floor() as i64)
}

/// Does a circle at `center` overlap any body already accepted?
pub fn intersects_any(center: DVec2, radius: f64, bodies: &[Body]) -> bool {
    bodies.iter().any(|b| b.overlaps_circle(center, radius))
}

/// Place `count` balls of `radius` inside a `width` x `height` viewport.
///
/// Fails if the radius does not fit on either axis, or if `max_attempts`
/// candidate draws are used up before every ball has a spot.
pub fn place_bodies<R: Rng + ?Sized>(
    rng: &mut R,
    width: f64,
    height: f64,
    count: usize,
    radius: f64,
    max_attempts: u32,
) -> Result<Vec<Body>, PlacementError> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(PlacementError::InvalidViewport { width, height });
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PlacementError::InvalidRadius(radius));
    }

    let (min_x, max_x) = axis_range(width, radius);
    let (min_y, max_y) = axis_range(height, radius);

    let mut bodies: Vec<Body> = Vec::with_capacity(count);
    let mut attempts = 0u32;

    while bodies.len() < count {
        if attempts >= max_attempts {
            return Err(PlacementError::Exhausted {
                placed: bodies.len(),
                requested: count,
                attempts,
            });
        }
        attempts += 1;

        let x = random_in_range(rng, min_x, max_x)?;
        let y = random_in_range(rng, min_y, max_y)?;
        let center = DVec2::new(x as f64, y as f64);

        if !intersects_any(center, radius, &bodies) {
            bodies.push(Body::new(radius, center));
        }
    }

    log::debug!(
        "Placed {} balls (r={}) in {}x{} after {} draws",
        count,
        radius,
        width,
        height,
        attempts
    );

    Ok(bodies)
}
