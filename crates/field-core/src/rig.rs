//! Camera rig and the rigid transform it applies to the 3D scene.
//!
//! The rig accumulates two rotation angles from drag input and a bounded
//! viewing distance from wheel input. `CameraRig::apply` pushes that state
//! onto the point clouds and the camera; applying the same rig twice leaves
//! the scene unchanged.

use crate::cloud::PointCloud;
use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct RigParams {
    pub rotate_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub initial_distance: f32,
}

impl Default for RigParams {
    fn default() -> Self {
        Self {
            rotate_sensitivity: ROTATE_SENSITIVITY,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            min_distance: MIN_ZOOM_DISTANCE,
            max_distance: MAX_ZOOM_DISTANCE,
            initial_distance: INITIAL_ZOOM_DISTANCE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Rotation about the x axis, driven by vertical drag. Unbounded.
    pub pitch: f32,
    /// Rotation about the y axis, driven by horizontal drag. Unbounded.
    pub yaw: f32,
    distance: f32,
    params: RigParams,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(RigParams::default())
    }
}

impl CameraRig {
    pub fn new(params: RigParams) -> Self {
        let distance = params
            .initial_distance
            .clamp(params.min_distance, params.max_distance);
        Self {
            pitch: 0.0,
            yaw: 0.0,
            distance,
            params,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Rotation as `(pitch, yaw)`.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        Vec2::new(self.pitch, self.yaw)
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.params.min_distance, self.params.max_distance);
    }

    /// Accumulate a drag delta in pixels.
    pub fn rotate_by(&mut self, drag_delta: Vec2) {
        self.yaw += drag_delta.x * self.params.rotate_sensitivity;
        self.pitch += drag_delta.y * self.params.rotate_sensitivity;
    }

    /// Move the camera along its view axis by a wheel delta.
    pub fn zoom_by(&mut self, delta_y: f32) {
        self.set_distance(self.distance + delta_y * self.params.zoom_sensitivity);
    }

    pub fn apply<'a>(
        &self,
        clouds: impl IntoIterator<Item = &'a mut PointCloud>,
        camera: &mut PerspectiveCamera,
    ) {
        for cloud in clouds {
            cloud.set_rotation(self.rotation());
        }
        camera.eye = Vec3::new(0.0, 0.0, self.distance);
    }
}

/// Right-handed perspective camera looking at the origin.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32, distance: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        (self.eye - self.target).length()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
