//! Pointer, click, drag and wheel state shared by both scenes.
//!
//! Every event is accepted; out-of-range values are clamped by the rig.

use crate::rig::{CameraRig, RigParams};
use crate::viewport::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub position: Vec2,
    pub repulsion_enabled: bool,
}

#[derive(Clone, Debug)]
pub struct InputTracker {
    viewport: Viewport,
    cursor: CursorState,
    rig: CameraRig,
    dragging: bool,
    drag_anchor: Vec2,
    drag_delta: Vec2,
}

impl InputTracker {
    pub fn new(viewport: Viewport, rig: RigParams) -> Self {
        Self {
            viewport,
            cursor: CursorState {
                position: viewport.center(),
                repulsion_enabled: true,
            },
            rig: CameraRig::new(rig),
            dragging: false,
            drag_anchor: Vec2::ZERO,
            drag_delta: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    #[inline]
    pub fn pointer_position(&self) -> Vec2 {
        self.cursor.position
    }

    #[inline]
    pub fn repulsion_enabled(&self) -> bool {
        self.cursor.repulsion_enabled
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Delta between the last two drag samples; zero when not dragging.
    #[inline]
    pub fn drag_delta(&self) -> Vec2 {
        if self.dragging {
            self.drag_delta
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Rotation as `(pitch, yaw)`.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rig.rotation()
    }

    #[inline]
    pub fn zoom_distance(&self) -> f32 {
        self.rig.distance()
    }

    pub fn on_pointer_move(&mut self, position: Vec2) {
        // Tracking freezes while repulsion is toggled off.
        if self.cursor.repulsion_enabled {
            self.cursor.position = position;
        }
        if self.dragging {
            self.drag_delta = position - self.drag_anchor;
            self.drag_anchor = position;
            self.rig.rotate_by(self.drag_delta);
        }
    }

    pub fn on_pointer_down(&mut self, position: Vec2) {
        self.dragging = true;
        self.drag_anchor = position;
        self.drag_delta = Vec2::ZERO;
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
        self.drag_delta = Vec2::ZERO;
    }

    pub fn on_click(&mut self) {
        self.cursor.repulsion_enabled = !self.cursor.repulsion_enabled;
        log::debug!(
            "[input] repulsion {}",
            if self.cursor.repulsion_enabled { "on" } else { "off" }
        );
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        self.rig.zoom_by(delta_y);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }
}
