//! 3D oscillating point clouds: a cube outline and an embedded text label.
//!
//! Rest positions are generated once and never change. Each frame the
//! displaced positions are written into a flat `xyz` buffer that the host
//! uploads to its point renderable.

use crate::constants::*;
use crate::glyphs::glyph_anchors;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct CloudParams {
    pub outline_count: usize,
    pub label_count: usize,
    pub half_extent: f32,
    pub outline_amplitude: f32,
    pub label_amplitude: f32,
    pub label_breath_rate: f32,
    pub label_jitter: f32,
    pub label_text: String,
    pub glyph_spacing: f32,
    pub outline_color: [f32; 3],
    pub label_palette: Vec<[f32; 3]>,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            outline_count: OUTLINE_PARTICLE_COUNT,
            label_count: LABEL_PARTICLE_COUNT,
            half_extent: CUBE_HALF_EXTENT,
            outline_amplitude: OUTLINE_AMPLITUDE,
            label_amplitude: LABEL_AMPLITUDE,
            label_breath_rate: LABEL_BREATH_RATE,
            label_jitter: LABEL_JITTER,
            label_text: DEFAULT_LABEL.to_string(),
            glyph_spacing: GLYPH_SPACING,
            outline_color: OUTLINE_COLOR,
            label_palette: LABEL_PALETTE.to_vec(),
        }
    }
}

/// Sinusoidal displacement shared by every point of one cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillation {
    pub amplitude: f32,
    /// Angular rate of the z term relative to x and y.
    pub z_rate: f32,
}

impl Oscillation {
    pub fn outline(params: &CloudParams) -> Self {
        Self {
            amplitude: params.outline_amplitude,
            z_rate: 1.0,
        }
    }

    pub fn label(params: &CloudParams) -> Self {
        Self {
            amplitude: params.label_amplitude,
            z_rate: params.label_breath_rate,
        }
    }

    /// Offset at absolute time `t` seconds for a point with phase `offset`.
    pub fn offset_at(&self, t: f64, offset: f32) -> Vec3 {
        let phase = t + offset as f64;
        let z_phase = self.z_rate as f64 * t + offset as f64;
        Vec3::new(
            phase.sin() as f32,
            phase.cos() as f32,
            z_phase.sin() as f32,
        ) * self.amplitude
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CloudPoint {
    pub initial: Vec3,
    /// Phase in \[0, 2π).
    pub offset: f32,
    pub color: Option<[f32; 3]>,
}

#[inline]
pub fn displaced_position(point: &CloudPoint, oscillation: Oscillation, t: f64) -> Vec3 {
    point.initial + oscillation.offset_at(t, point.offset)
}

/// Points spread uniformly over the six faces of a cube centered on the
/// origin. Every point lies exactly on one face plane.
pub fn sample_outline(count: usize, half_extent: f32, rng: &mut impl Rng) -> Vec<CloudPoint> {
    let h = half_extent;
    (0..count)
        .map(|_| {
            let face = rng.gen_range(0..6usize);
            let u = rng.gen_range(-h..=h);
            let v = rng.gen_range(-h..=h);
            let fixed = if face % 2 == 0 { h } else { -h };
            let initial = match face / 2 {
                0 => Vec3::new(fixed, u, v),
                1 => Vec3::new(u, fixed, v),
                _ => Vec3::new(u, v, fixed),
            };
            CloudPoint {
                initial,
                offset: rng.gen_range(0.0..TAU),
                color: None,
            }
        })
        .collect()
}

/// Points clustered around random glyph anchors, each jittered on all three
/// axes and tinted from `palette`. Empty when `anchors` is empty.
pub fn sample_label(
    count: usize,
    anchors: &[Vec3],
    jitter: f32,
    palette: &[[f32; 3]],
    rng: &mut impl Rng,
) -> Vec<CloudPoint> {
    if anchors.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let anchor = anchors[rng.gen_range(0..anchors.len())];
            let j = Vec3::new(
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
            );
            let color = if palette.is_empty() {
                None
            } else {
                Some(palette[rng.gen_range(0..palette.len())])
            };
            CloudPoint {
                initial: anchor + j,
                offset: rng.gen_range(0.0..TAU),
                color,
            }
        })
        .collect()
}

/// One renderable point set with its flat position and color buffers.
#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<CloudPoint>,
    oscillation: Oscillation,
    positions: Vec<f32>,
    colors: Vec<f32>,
    rotation: Vec2,
    needs_update: bool,
}

impl PointCloud {
    pub fn new(points: Vec<CloudPoint>, oscillation: Oscillation, fallback_color: [f32; 3]) -> Self {
        let positions = points
            .iter()
            .flat_map(|p| p.initial.to_array())
            .collect::<Vec<_>>();
        let colors = points
            .iter()
            .flat_map(|p| p.color.unwrap_or(fallback_color))
            .collect::<Vec<_>>();
        Self {
            points,
            oscillation,
            positions,
            colors,
            rotation: Vec2::ZERO,
            needs_update: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[CloudPoint] {
        &self.points
    }

    #[inline]
    pub fn oscillation(&self) -> Oscillation {
        self.oscillation
    }

    /// Flat `xyz` buffer of displaced positions.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `rgb` buffer, fixed at creation.
    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn set_rotation(&mut self, pitch_yaw: Vec2) {
        self.rotation = pitch_yaw;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    /// Rewrite the position buffer for time `t` and flag it for upload.
    pub fn update(&mut self, t: f64) {
        for (p, out) in self.points.iter().zip(self.positions.chunks_exact_mut(3)) {
            let d = displaced_position(p, self.oscillation, t);
            out.copy_from_slice(&d.to_array());
        }
        self.needs_update = true;
    }

    #[inline]
    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Clear the upload flag, returning whether it was set.
    pub fn take_needs_update(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }
}

pub fn build_outline(params: &CloudParams, rng: &mut impl Rng) -> PointCloud {
    let points = sample_outline(params.outline_count, params.half_extent, rng);
    PointCloud::new(points, Oscillation::outline(params), params.outline_color)
}

pub fn build_label(params: &CloudParams, rng: &mut impl Rng) -> PointCloud {
    let anchors = glyph_anchors(&params.label_text, params.glyph_spacing);
    if anchors.is_empty() {
        log::warn!("[cloud] label {:?} has no glyph anchors", params.label_text);
    }
    let points = sample_label(
        params.label_count,
        &anchors,
        params.label_jitter,
        &params.label_palette,
        rng,
    );
    PointCloud::new(points, Oscillation::label(params), params.outline_color)
}
