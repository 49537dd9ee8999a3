//! Per-frame paint context.
//!
//! Bundles the egui painter, the viewport rectangle and the camera so
//! sub-renderers can project world points without knowing about egui layout.

use egui::{Painter, Pos2, Rect};
use glam::Vec3;

use crate::camera::Camera;
use crate::light::DirectionalLight;

/// A world point projected into the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub pos: Pos2,
    /// Distance from the camera eye
    pub depth: f32,
}

/// Everything a sub-renderer needs to paint one frame
pub struct FrameContext<'a> {
    pub painter: &'a Painter,
    pub rect: Rect,
    pub camera: &'a Camera,
    pub light: &'a DirectionalLight,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        painter: &'a Painter,
        rect: Rect,
        camera: &'a Camera,
        light: &'a DirectionalLight,
    ) -> Self {
        Self {
            painter,
            rect,
            camera,
            light,
        }
    }

    /// Project a world point to viewport pixels.
    ///
    /// Returns None for points behind the camera.
    pub fn to_screen(&self, world: Vec3) -> Option<ScreenPoint> {
        let ndc = self.camera.project(world)?;
        let pos = Pos2::new(
            self.rect.left() + (ndc.x + 1.0) * 0.5 * self.rect.width(),
            self.rect.top() + (1.0 - ndc.y) * 0.5 * self.rect.height(),
        );
        Some(ScreenPoint {
            pos,
            depth: world.distance(self.camera.eye()),
        })
    }
}
