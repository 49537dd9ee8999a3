//! Tube material derived from selection and joint highlight flags

use egui::Color32;
use tube_core::Drawable;

use crate::constants::material;

/// How a tube is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeMaterial {
    /// Base color (sRGB)
    pub color: [u8; 3],
    pub opacity: f32,
    pub transparent: bool,
    pub wireframe: bool,
}

impl TubeMaterial {
    /// Orange when selected, gray otherwise; half transparent when the box
    /// overlaps another tube.
    pub fn for_drawable(drawable: &Drawable) -> Self {
        let color = if drawable.selected {
            material::SELECTED_COLOR
        } else {
            material::DEFAULT_COLOR
        };
        let transparent = drawable.joint_highlighted;

        Self {
            color,
            opacity: if transparent { material::HIGHLIGHT_OPACITY } else { 1.0 },
            transparent,
            wireframe: drawable.wireframe,
        }
    }

    /// Color with lighting applied
    pub fn shaded(&self, brightness: f32) -> Color32 {
        let scale = |c: u8| (c as f32 * brightness.clamp(0.0, 1.0)).round() as u8;
        Color32::from_rgba_unmultiplied(
            scale(self.color[0]),
            scale(self.color[1]),
            scale(self.color[2]),
            (self.opacity * 255.0).round() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use tube_core::TubeId;

    fn drawable(selected: bool, joint_highlighted: bool) -> Drawable {
        Drawable {
            id: TubeId(1),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            size: Vec3::ONE,
            selected,
            joint_highlighted,
            wireframe: false,
        }
    }

    #[test]
    fn test_selected_is_orange() {
        let material = TubeMaterial::for_drawable(&drawable(true, false));
        assert_eq!(material.color, material::SELECTED_COLOR);
        assert_eq!(material.opacity, 1.0);
        assert!(!material.transparent);
    }

    #[test]
    fn test_highlighted_is_half_transparent() {
        let material = TubeMaterial::for_drawable(&drawable(false, true));
        assert_eq!(material.color, material::DEFAULT_COLOR);
        assert_eq!(material.opacity, 0.5);
        assert!(material.transparent);
        assert_eq!(material.shaded(1.0).a(), 128);
    }
}
