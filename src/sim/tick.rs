//! One physics step
//!
//! Collisions are resolved first, against positions as they stood at the
//! start of the step. Then every ball moves and is pushed back inside the
//! viewport. Velocities are per frame; there is no time delta.

use super::collision::resolve_collisions;
use super::state::Simulation;

/// Advance the simulation by one frame
pub fn tick(sim: &mut Simulation) {
    let (width, height) = sim.bounds();

    let contacts = resolve_collisions(sim.bodies_mut());
    if !contacts.is_empty() {
        log::debug!("tick {}: {} contacts", sim.time_ticks(), contacts.len());
    }

    for body in sim.bodies_mut() {
        body.integrate();
        body.reflect_at_bounds(width, height);
    }

    sim.advance_clock();
}
