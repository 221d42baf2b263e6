//! Simulation core
//!
//! Everything that moves balls lives here. This module must stay free of
//! rendering and platform code:
//! - Seeded RNG only (placement)
//! - Stable iteration order (sequence order of the ball list)
//! - One tick per rendered frame, no time delta

pub mod body;
pub mod collision;
pub mod placement;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{Contact, pair_impulse, resolve_collisions};
pub use placement::{intersects_any, place_bodies, random_in_range};
pub use state::Simulation;
pub use tick::tick;
