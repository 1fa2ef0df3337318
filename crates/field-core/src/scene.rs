//! Per-frame entry points for the two scenes.
//!
//! Both are plain context objects: a host (or a test) owns them and calls
//! `tick` once per frame with whatever clock it likes.

use crate::cloud::{build_label, build_outline, CloudParams, PointCloud};
use crate::connectivity::{draw_edges, ConnectivityParams};
use crate::field::{FieldParams, ParticleField};
use crate::input::InputTracker;
use crate::rig::{CameraRig, PerspectiveCamera};
use crate::surface::DrawSurface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

pub struct FieldScene {
    pub field: ParticleField,
    pub connectivity: ConnectivityParams,
    scratch: Vec<Vec2>,
}

impl FieldScene {
    pub fn new(
        viewport: &Viewport,
        params: FieldParams,
        connectivity: ConnectivityParams,
        rng: &mut impl Rng,
    ) -> Self {
        Self::from_field(ParticleField::new(viewport, params, rng), connectivity)
    }

    pub fn from_field(field: ParticleField, connectivity: ConnectivityParams) -> Self {
        Self {
            field,
            connectivity,
            scratch: Vec::new(),
        }
    }

    pub fn tick(&mut self, input: &InputTracker) {
        self.field.step(input.cursor(), input.viewport());
    }

    /// Clear, draw nodes, then draw edges over them.
    pub fn render(&mut self, surface: &mut impl DrawSurface, viewport: &Viewport) {
        surface.clear(viewport.extent());
        self.field.draw(surface);
        self.scratch.clear();
        self.scratch.extend(self.field.positions());
        draw_edges(surface, &self.scratch, &self.connectivity);
    }
}

pub struct CloudScene {
    pub outline: PointCloud,
    pub label: PointCloud,
    pub camera: PerspectiveCamera,
}

impl CloudScene {
    pub fn new(params: &CloudParams, aspect: f32, rig: &CameraRig, rng: &mut impl Rng) -> Self {
        let outline = build_outline(params, rng);
        let label = build_label(params, rng);
        log::debug!(
            "[cloud] outline={} label={} points",
            outline.len(),
            label.len()
        );
        Self {
            outline,
            label,
            camera: PerspectiveCamera::new(aspect, rig.distance()),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    /// Displace both clouds for absolute time `t` seconds and apply the rig.
    pub fn tick(&mut self, t: f64, rig: &CameraRig) {
        self.outline.update(t);
        self.label.update(t);
        rig.apply([&mut self.outline, &mut self.label], &mut self.camera);
    }
}
