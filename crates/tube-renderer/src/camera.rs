//! Orbit camera

use glam::{Mat4, Vec2, Vec3, Vec4};
use tube_core::Ray;

use crate::config::CameraConfig;

/// Pitch limit keeping the camera off the poles
const MAX_PITCH: f32 = 1.55;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 200.0;

/// Camera orbiting a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    /// Rotation around the Y axis (radians), 0 looks down -Z
    pub yaw: f32,
    /// Elevation above the ground plane (radians)
    pub pitch: f32,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a camera at `eye` looking at `target`
    pub fn looking_at(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(MIN_DISTANCE);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let yaw = offset.x.atan2(offset.z);

        Self {
            target,
            distance,
            yaw,
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
            fov_y: 50.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Create a camera from configuration
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::looking_at(Vec3::from(config.eye), Vec3::from(config.target), aspect);
        camera.set_fov_degrees(config.fov_degrees);
        camera.set_near(config.near_plane);
        camera.set_far(config.far_plane);
        camera
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn update_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn set_fov_degrees(&mut self, fov: f32) {
        self.fov_y = fov.clamp(1.0, 170.0).to_radians();
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near.max(1e-4);
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far.max(self.near + 1e-3);
    }

    /// Rotate around the target
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Scale the distance to the target (factor < 1 moves closer)
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }

    /// Ray from the eye through a point in normalized device coordinates
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let eye = self.eye();
        let inverse = self.view_proj().inverse();
        let on_near_plane = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        Ray::new(eye, on_near_plane - eye)
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns None for points behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_proj() * Vec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 1.0)
    }
}
