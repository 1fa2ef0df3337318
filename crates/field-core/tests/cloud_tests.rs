// Host-side tests for the oscillating point clouds and glyph layout.

use field_core::glyphs::{glyph, glyph_anchors, GLYPH_COLUMNS, GLYPH_ROWS};
use field_core::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

fn approx_vec3(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).abs().max_element() < tol
}

fn point(initial: Vec3, offset: f32) -> CloudPoint {
    CloudPoint {
        initial,
        offset,
        color: None,
    }
}

#[test]
fn displacement_at_time_zero_is_along_y() {
    let params = CloudParams::default();
    let base = Vec3::new(1.0, -2.0, 0.5);
    for osc in [Oscillation::outline(&params), Oscillation::label(&params)] {
        let d = displaced_position(&point(base, 0.0), osc, 0.0);
        assert!(approx_vec3(d, base + Vec3::new(0.0, osc.amplitude, 0.0), 1e-6));
    }
}

#[test]
fn outline_displacement_is_two_pi_periodic() {
    let osc = Oscillation::outline(&CloudParams::default());
    let p = point(Vec3::new(0.3, 0.2, -1.0), 1.3);
    for i in 0..20 {
        let t = i as f64 * 0.37 + 1000.0;
        let a = displaced_position(&p, osc, t);
        let b = displaced_position(&p, osc, t + TAU);
        assert!(approx_vec3(a, b, 1e-5), "mismatch at t={t}");
    }
}

#[test]
fn label_xy_is_two_pi_periodic_and_z_breathes_slower() {
    let osc = Oscillation::label(&CloudParams::default());
    let p = point(Vec3::ZERO, 0.0);
    let t = 0.9;
    let a = displaced_position(&p, osc, t);
    let b = displaced_position(&p, osc, t + TAU);
    assert!((a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5);
    assert!((a.z - 0.05 * (0.5 * t).sin() as f32).abs() < 1e-6);
    let c = displaced_position(&p, osc, t + 2.0 * TAU);
    assert!((a.z - c.z).abs() < 1e-5);
}

#[test]
fn displacement_is_bounded_by_amplitude() {
    let params = CloudParams::default();
    let osc = Oscillation::outline(&params);
    let p = point(Vec3::ZERO, 2.0);
    for i in 0..200 {
        let d = displaced_position(&p, osc, i as f64 * 0.1);
        assert!(d.abs().max_element() <= params.outline_amplitude + 1e-6);
    }
}

#[test]
fn outline_points_lie_on_cube_faces() {
    let mut rng = StdRng::seed_from_u64(1);
    let h = CUBE_HALF_EXTENT;
    let points = sample_outline(OUTLINE_PARTICLE_COUNT, h, &mut rng);
    assert_eq!(points.len(), OUTLINE_PARTICLE_COUNT);
    let mut faces = [0usize; 6];
    for p in &points {
        let c = p.initial.to_array();
        let on_face: Vec<usize> = (0..3).filter(|&i| c[i].abs() == h).collect();
        assert!(!on_face.is_empty(), "{:?} is not on a face", p.initial);
        assert!(c.iter().all(|v| v.abs() <= h));
        let axis = on_face[0];
        faces[axis * 2 + usize::from(c[axis] < 0.0)] += 1;
        assert!(p.offset >= 0.0 && p.offset < std::f32::consts::TAU);
        assert!(p.color.is_none());
    }
    // 2000 draws over six faces; every face gets a healthy share
    assert!(faces.iter().all(|&n| n > 200), "face counts {faces:?}");
}

#[test]
fn label_points_cluster_around_anchors_with_palette_colors() {
    let mut rng = StdRng::seed_from_u64(2);
    let anchors = glyph_anchors("HI", GLYPH_SPACING);
    let points = sample_label(500, &anchors, LABEL_JITTER, &LABEL_PALETTE, &mut rng);
    assert_eq!(points.len(), 500);
    for p in &points {
        let near = anchors
            .iter()
            .any(|a| (p.initial - *a).abs().max_element() <= LABEL_JITTER + 1e-6);
        assert!(near, "{:?} far from every anchor", p.initial);
        let color = p.color.expect("label points carry a color");
        assert!(LABEL_PALETTE.contains(&color));
    }
}

#[test]
fn label_without_anchors_is_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(sample_label(100, &[], LABEL_JITTER, &LABEL_PALETTE, &mut rng).is_empty());
    let params = CloudParams {
        label_text: "~~".to_string(),
        ..CloudParams::default()
    };
    assert!(build_label(&params, &mut rng).is_empty());
}

#[test]
fn glyph_table_shapes() {
    for c in ('A'..='Z').chain('0'..='9') {
        let rows = glyph(c).unwrap_or_else(|| panic!("missing glyph {c}"));
        assert_eq!(rows.len(), GLYPH_ROWS);
        assert!(rows.iter().all(|r| r.len() == GLYPH_COLUMNS));
        assert!(rows.iter().any(|r| r.contains('#')));
    }
    assert_eq!(glyph('h'), glyph('H'));
    assert!(glyph('~').is_none());
}

#[test]
fn anchors_are_centered_and_flat() {
    let anchors = glyph_anchors("HELLO", GLYPH_SPACING);
    assert!(!anchors.is_empty());
    assert!(anchors.iter().all(|a| a.z == 0.0));
    let min_x = anchors.iter().map(|a| a.x).fold(f32::MAX, f32::min);
    let max_x = anchors.iter().map(|a| a.x).fold(f32::MIN, f32::max);
    assert!((min_x + max_x).abs() < 1e-4);
    // The default label fits inside the cube
    assert!(max_x < CUBE_HALF_EXTENT);
    assert!(glyph_anchors("", GLYPH_SPACING).is_empty());
    assert!(glyph_anchors("   ", GLYPH_SPACING).is_empty());
}

#[test]
fn point_cloud_update_rewrites_buffer_without_touching_rest_shape() {
    let params = CloudParams::default();
    let mut rng = StdRng::seed_from_u64(4);
    let mut cloud = build_outline(&params, &mut rng);
    assert_eq!(cloud.positions().len(), cloud.len() * 3);
    assert_eq!(cloud.colors().len(), cloud.len() * 3);
    assert!(cloud.take_needs_update());
    assert!(!cloud.needs_update());

    let rest: Vec<CloudPoint> = cloud.points().to_vec();
    cloud.update(12.5);
    assert!(cloud.needs_update());
    assert_eq!(cloud.points(), rest.as_slice());
    for (p, xyz) in rest.iter().zip(cloud.positions().chunks_exact(3)) {
        let expected = displaced_position(p, cloud.oscillation(), 12.5);
        assert!(approx_vec3(Vec3::from_slice(xyz), expected, 1e-6));
    }
}

#[test]
fn outline_uses_fallback_color_and_label_uses_palette() {
    let params = CloudParams::default();
    let mut rng = StdRng::seed_from_u64(5);
    let outline = build_outline(&params, &mut rng);
    assert_eq!(&outline.colors()[..3], &OUTLINE_COLOR);
    let label = build_label(&params, &mut rng);
    assert_eq!(label.len(), LABEL_PARTICLE_COUNT);
    for rgb in label.colors().chunks_exact(3) {
        assert!(LABEL_PALETTE.iter().any(|c| c.as_slice() == rgb));
    }
}
