// Host-side tests for the 2D node field simulation.

use field_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

fn particle_at(position: Vec2, base_velocity: Vec2) -> Particle {
    Particle {
        position,
        base_velocity,
        velocity: Vec2::ZERO,
        radius: 2.0,
    }
}

fn cursor(position: Vec2, repulsion_enabled: bool) -> CursorState {
    CursorState {
        position,
        repulsion_enabled,
    }
}

#[test]
fn new_field_respects_count_and_ranges() {
    let vp = viewport();
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::new(&vp, params.clone(), &mut rng);
    assert_eq!(field.particles().len(), FIELD_PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= vp.width);
        assert!(p.position.y >= 0.0 && p.position.y <= vp.height);
        assert!(p.radius >= params.radius_min && p.radius <= params.radius_max);
        assert!(p.base_velocity.x.abs() <= 1.0 && p.base_velocity.y.abs() <= 1.0);
        assert_eq!(p.velocity, p.base_velocity);
    }
}

#[test]
fn same_seed_builds_same_field() {
    let vp = viewport();
    let a = ParticleField::new(&vp, FieldParams::default(), &mut StdRng::seed_from_u64(3));
    let b = ParticleField::new(&vp, FieldParams::default(), &mut StdRng::seed_from_u64(3));
    let pa: Vec<Vec2> = a.positions().collect();
    let pb: Vec<Vec2> = b.positions().collect();
    assert_eq!(pa, pb);
}

#[test]
fn repulsion_speed_is_two_in_slow_zone_and_three_outside() {
    let params = FieldParams::default();
    let inner = repulsion_velocity(Vec2::new(30.0, 40.0), &params).expect("inside outer radius");
    assert!((inner.length() - 2.0).abs() < 1e-4);
    let outer = repulsion_velocity(Vec2::new(0.0, -150.0), &params).expect("inside outer radius");
    assert!((outer.length() - 3.0).abs() < 1e-4);
    // Points away from the cursor
    assert!(outer.y < 0.0 && outer.x.abs() < 1e-4);
}

#[test]
fn repulsion_snaps_at_slow_zone_boundary() {
    let params = FieldParams::default();
    let below = repulsion_velocity(Vec2::new(79.99, 0.0), &params).unwrap();
    let at = repulsion_velocity(Vec2::new(80.0, 0.0), &params).unwrap();
    assert!((below.length() - 2.0).abs() < 1e-4);
    assert!((at.length() - 3.0).abs() < 1e-4);
}

#[test]
fn repulsion_ends_at_outer_radius() {
    let params = FieldParams::default();
    assert!(repulsion_velocity(Vec2::new(200.0, 0.0), &params).is_none());
    assert!(repulsion_velocity(Vec2::new(150.0, 150.0), &params).is_none());
}

#[test]
fn coincident_cursor_flees_along_positive_x() {
    let params = FieldParams::default();
    let v = repulsion_velocity(Vec2::ZERO, &params).unwrap();
    assert!((v.x - 2.0).abs() < 1e-6);
    assert!(v.y.abs() < 1e-6);
}

#[test]
fn step_from_center_with_cursor_in_slow_zone_moves_at_speed_two() {
    let vp = viewport();
    let params = FieldParams::default();
    let mut p = particle_at(vp.center(), Vec2::new(0.5, -0.5));
    p.step(&cursor(vp.center() - Vec2::new(50.0, 0.0), true), &vp, &params);
    assert!((p.velocity.length() - 2.0).abs() < 1e-4);
    assert!(p.velocity.x > 0.0);
}

#[test]
fn disabled_repulsion_restores_base_velocity_at_center() {
    let vp = viewport();
    let params = FieldParams::default();
    let base = Vec2::new(0.7, -0.3);
    let mut p = particle_at(vp.center(), base);
    p.velocity = Vec2::new(3.0, 3.0);
    // Cursor right on top of the particle, but repulsion is off
    p.step(&cursor(vp.center(), false), &vp, &params);
    assert!((p.velocity - base).length() < 1e-5);
    assert!((p.position - (vp.center() + base)).length() < 1e-4);
}

#[test]
fn cursor_outside_outer_radius_keeps_drift() {
    let vp = viewport();
    let params = FieldParams::default();
    let base = Vec2::new(-0.4, 0.9);
    let mut p = particle_at(vp.center(), base);
    p.step(&cursor(Vec2::new(10.0, 10.0), true), &vp, &params);
    assert!((p.velocity - base).length() < 1e-5);
}

#[test]
fn centering_pulls_toward_viewport_center() {
    let vp = viewport();
    let params = FieldParams::default();
    let mut p = particle_at(Vec2::new(400.0, 360.0), Vec2::ZERO);
    p.step(&cursor(Vec2::ZERO, false), &vp, &params);
    let expected = (640.0 - 400.0) * CENTERING_STRENGTH;
    assert!((p.velocity.x - expected).abs() < 1e-5);
    assert!(p.velocity.y.abs() < 1e-5);
}

#[test]
fn edge_force_is_zero_away_from_edges() {
    let vp = viewport();
    let params = FieldParams::default();
    assert_eq!(edge_force(vp.center(), &vp, &params), Vec2::ZERO);
}

#[test]
fn edge_force_points_inward_and_stacks_in_corners() {
    let vp = viewport();
    let params = FieldParams::default();
    let left = edge_force(Vec2::new(10.0, 360.0), &vp, &params);
    assert!((left.x - (40.0 / 50.0 * 1.5)).abs() < 1e-5);
    assert_eq!(left.y, 0.0);

    let right = edge_force(Vec2::new(1270.0, 360.0), &vp, &params);
    assert!((right.x + (40.0 / 50.0 * 1.5)).abs() < 1e-5);

    let corner = edge_force(Vec2::new(1275.0, 5.0), &vp, &params);
    assert!(corner.x < 0.0 && corner.y > 0.0);
    assert!((corner.y - 45.0 / 50.0 * 1.5).abs() < 1e-5);
}

#[test]
fn bounce_clamps_and_reflects() {
    let vp = viewport();
    let params = FieldParams::default();
    let mut p = particle_at(Vec2::new(3.0, 360.0), Vec2::new(-20.0, 0.0));
    p.step(&cursor(Vec2::ZERO, false), &vp, &params);
    assert_eq!(p.position.x, p.radius);
    assert!(p.velocity.x > 0.0, "x velocity should be reflected");

    let mut q = particle_at(Vec2::new(640.0, 717.0), Vec2::new(0.0, 20.0));
    q.step(&cursor(Vec2::ZERO, false), &vp, &params);
    assert_eq!(q.position.y, vp.height - q.radius);
    assert!(q.velocity.y < 0.0);
}

#[test]
fn positions_stay_inside_viewport_over_many_steps() {
    let vp = viewport();
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = ParticleField::new(&vp, FieldParams::default(), &mut rng);
    let mut c = cursor(vp.center(), true);
    for frame in 0..600 {
        // Sweep the cursor across the viewport
        c.position = Vec2::new((frame * 7 % 1280) as f32, (frame * 3 % 720) as f32);
        field.step(&c, &vp);
        for p in field.particles() {
            assert!(p.position.x >= p.radius && p.position.x <= vp.width - p.radius);
            assert!(p.position.y >= p.radius && p.position.y <= vp.height - p.radius);
        }
    }
}

#[test]
fn shrinking_viewport_pulls_particles_back_inside() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = ParticleField::new(&viewport(), FieldParams::default(), &mut rng);
    let small = Viewport::new(400.0, 300.0);
    field.step(&cursor(small.center(), false), &small);
    for p in field.particles() {
        assert!(p.position.x >= p.radius && p.position.x <= small.width - p.radius);
        assert!(p.position.y >= p.radius && p.position.y <= small.height - p.radius);
    }
}

#[test]
fn reset_rerandomizes_within_viewport() {
    let vp = viewport();
    let params = FieldParams::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut p = particle_at(Vec2::new(-50.0, -50.0), Vec2::ZERO);
    p.reset(&vp, &params, &mut rng);
    assert!(p.position.x >= 0.0 && p.position.x <= vp.width);
    assert!(p.position.y >= 0.0 && p.position.y <= vp.height);
    assert_eq!(p.velocity, p.base_velocity);
}
