//! Tube and TubeTemplate definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{TubeKind, TubePatch};
use crate::geometry::Aabb;

/// Stable identifier of a tube within a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TubeId(pub u32);

impl std::fmt::Display for TubeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangular tube, rendered and collided as a box
#[derive(Debug, Clone, PartialEq)]
pub struct Tube {
    pub id: TubeId,
    pub kind: TubeKind,
    /// Extent along X
    pub width: f32,
    /// Extent along Y
    pub height: f32,
    /// Extent along Z
    pub length: f32,
    /// Wall thickness (not used by geometry yet)
    pub thickness: f32,
    /// Box center in world space
    pub position: Vec3,
    /// Euler angles (XYZ order) in radians, stored unsnapped
    pub rotation: Vec3,
    /// Render as edges only
    pub wireframe: bool,
    /// Derived by the scene store after every mutation
    pub(crate) joint_highlighted: bool,
}

impl Tube {
    /// Create a tube from a template
    pub fn from_template(id: TubeId, template: &TubeTemplate) -> Self {
        Self {
            id,
            kind: template.kind,
            width: template.width,
            height: template.height,
            length: template.length,
            thickness: template.thickness,
            position: Vec3::from(template.position),
            rotation: Vec3::from(template.rotation),
            wireframe: template.wireframe,
            joint_highlighted: false,
        }
    }

    /// Whether this tube's box overlaps another tube's box
    pub fn is_joint_highlighted(&self) -> bool {
        self.joint_highlighted
    }

    /// Box dimensions as (width, height, length)
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.length)
    }

    /// Axis-aligned bounding box; rotation is ignored
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size())
    }

    /// Merge a patch into this tube, keeping fields the patch leaves unset
    pub fn apply(&mut self, patch: &TubePatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(length) = patch.length {
            self.length = length;
        }
        if let Some(thickness) = patch.thickness {
            self.thickness = thickness;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(wireframe) = patch.wireframe {
            self.wireframe = wireframe;
        }
    }
}

/// Parameters for newly created tubes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeTemplate {
    pub kind: TubeKind,
    pub width: f32,
    pub height: f32,
    pub length: f32,
    pub thickness: f32,
    pub position: [f32; 3],
    /// Radians
    pub rotation: [f32; 3],
    pub wireframe: bool,
}

impl Default for TubeTemplate {
    fn default() -> Self {
        Self {
            kind: TubeKind::Square,
            width: 1.0,
            height: 1.0,
            length: 3.0,
            thickness: 0.1,
            position: [0.0; 3],
            rotation: [0.0; 3],
            wireframe: false,
        }
    }
}

impl TubeTemplate {
    /// Template for a cube of the given edge length
    pub fn cube(edge: f32) -> Self {
        Self {
            width: edge,
            height: edge,
            length: edge,
            ..Default::default()
        }
    }
}
