//! Ball-ball collision response
//!
//! Every unordered pair is tested once per tick, in sequence order. An
//! overlapping pair trades equal and opposite velocity changes that would
//! carry the second ball to the tangent point. Positions are never corrected
//! directly, so a pair can stay visually overlapped for a frame or two.

use glam::DVec2;

use super::body::Body;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Velocity change for an overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the first ball (its spring coefficient was used)
    pub first: usize,
    pub second: usize,
    /// Subtracted from `first`'s velocity, added to `second`'s
    pub impulse: DVec2,
}

/// Impulse between `a` and `b`, or `None` if they do not overlap.
///
/// `a` is the initiating ball: only its spring coefficient is applied.
/// Coincident centers resolve along +x.
pub fn pair_impulse(a: &Body, b: &Body) -> Option<DVec2> {
    let (dist, angle) = cartesian_to_polar(b.pos - a.pos);
    let min_dist = a.radius + b.radius;

    if dist >= min_dist {
        return None;
    }

    // Where b would sit if the two were exactly touching
    let target = a.pos + polar_to_cartesian(min_dist, angle);
    Some((target - b.pos) * a.spring)
}

/// Resolve every overlapping pair once. Returns the contacts applied.
pub fn resolve_collisions(bodies: &mut [Body]) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let n = bodies.len();

    for i in 0..n {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let first = &mut head[i];
        for (offset, second) in tail.iter_mut().enumerate() {
            if let Some(impulse) = pair_impulse(first, second) {
                first.vel -= impulse;
                second.vel += impulse;
                contacts.push(Contact {
                    first: i,
                    second: i + 1 + offset,
                    impulse,
                });
            }
        }
    }

    contacts
}
