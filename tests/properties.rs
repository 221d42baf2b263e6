//! Property tests for placement, wall bounces and ball-ball response

use ball_collision::polar_to_cartesian;
use ball_collision::sim::{Body, place_bodies, resolve_collisions};
use glam::DVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn placed_balls_never_overlap(
        seed in any::<u64>(),
        count in 0usize..8,
        radius in 5.0f64..20.0,
        width in 300.0f64..1000.0,
        height in 300.0f64..1000.0,
    ) {
        // At most 7 balls of diameter 40 always fit in 300x300
        let mut rng = Pcg32::seed_from_u64(seed);
        let placed = place_bodies(&mut rng, width, height, count, radius, 50_000);
        prop_assert!(placed.is_ok(), "placement failed: {:?}", placed);
        let bodies = placed.unwrap();

        prop_assert_eq!(bodies.len(), count);
        for (i, a) in bodies.iter().enumerate() {
            prop_assert!(a.is_contained(width, height));
            for b in &bodies[i + 1..] {
                prop_assert!(!a.overlaps(b));
                prop_assert!(a.pos.distance(b.pos) >= a.radius + b.radius);
            }
        }
    }

    #[test]
    fn reflection_keeps_balls_inside(
        x in -500.0f64..1500.0,
        y in -500.0f64..1500.0,
        vx in -50.0f64..50.0,
        vy in -50.0f64..50.0,
        radius in 1.0f64..50.0,
        width in 100.0f64..1000.0,
        height in 100.0f64..1000.0,
    ) {
        let mut body = Body::new(radius, DVec2::new(x, y)).with_velocity(DVec2::new(vx, vy));
        body.integrate();
        body.reflect_at_bounds(width, height);
        prop_assert!(body.is_contained(width, height));
    }

    #[test]
    fn right_wall_overshoot_reverses_vx(
        overshoot in 0.001f64..100.0,
        vx in 0.0f64..20.0,
        restitution in -1.0f64..0.0,
    ) {
        let (width, height, radius) = (800.0, 600.0, 50.0);
        let mut body = Body::new(radius, DVec2::new(width - radius + overshoot, 300.0))
            .with_velocity(DVec2::new(vx, 0.0));
        body.restitution = restitution;
        body.reflect_at_bounds(width, height);
        prop_assert_eq!(body.pos.x, width - radius);
        prop_assert_eq!(body.vel.x, vx * restitution);
    }

    #[test]
    fn impulses_are_equal_and_opposite(
        angle in -3.1f64..3.1,
        gap in 0.0f64..19.0,
        v1 in (-10.0f64..10.0, -10.0f64..10.0),
        v2 in (-10.0f64..10.0, -10.0f64..10.0),
    ) {
        let a = Body::new(10.0, DVec2::new(100.0, 100.0)).with_velocity(DVec2::new(v1.0, v1.1));
        let b = Body::new(10.0, a.pos + polar_to_cartesian(gap, angle))
            .with_velocity(DVec2::new(v2.0, v2.1));
        let mut bodies = vec![a.clone(), b.clone()];
        resolve_collisions(&mut bodies);

        let da = bodies[0].vel - a.vel;
        let db = bodies[1].vel - b.vel;
        prop_assert!((da + db).length() < 1e-9);
        prop_assert!(db.length() > 0.0);
    }

    #[test]
    fn separated_pairs_keep_their_velocities(
        angle in -3.1f64..3.1,
        extra in 0.001f64..200.0,
        r1 in 1.0f64..50.0,
        r2 in 1.0f64..50.0,
    ) {
        let a = Body::new(r1, DVec2::new(0.0, 0.0));
        let b = Body::new(r2, polar_to_cartesian(r1 + r2 + extra, angle))
            .with_velocity(DVec2::new(-1.0, 0.5));
        let mut bodies = vec![a.clone(), b.clone()];
        prop_assert!(resolve_collisions(&mut bodies).is_empty());
        prop_assert_eq!(bodies[0].vel, a.vel);
        prop_assert_eq!(bodies[1].vel, b.vel);
    }
}
