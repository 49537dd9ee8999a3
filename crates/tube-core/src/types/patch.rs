//! Partial tube update

use glam::Vec3;

use super::TubeKind;

/// A partial update for a tube.
///
/// Fields left as `None` keep their current value when the patch is merged.
/// There is no field for the joint highlight flag; it is always derived.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TubePatch {
    pub kind: Option<TubeKind>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub length: Option<f32>,
    pub thickness: Option<f32>,
    pub position: Option<Vec3>,
    /// Euler angles in radians
    pub rotation: Option<Vec3>,
    pub wireframe: Option<bool>,
}

impl TubePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: TubeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Set rotation (radians)
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = Some(wireframe);
        self
    }
}
