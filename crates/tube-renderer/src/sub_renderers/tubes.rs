//! Tube sub-renderer: boxes painted back to front.
//!
//! egui has no depth buffer, so faces and edges of all tubes are collected,
//! sorted by distance from the eye and painted farthest first.

use egui::{Pos2, Shape, Stroke};
use glam::{EulerRot, Mat4, Quat, Vec3};
use tube_core::Drawable;

use crate::constants::material as constants;
use crate::context::{FrameContext, ScreenPoint};
use crate::material::TubeMaterial;
use crate::traits::SubRenderer;

/// Box faces as corner indices with their local outward normal.
///
/// Corner `i` has bit 0 set for +X, bit 1 for +Y, bit 2 for +Z.
pub const FACES: [([usize; 4], Vec3); 6] = [
    ([0, 4, 6, 2], Vec3::NEG_X),
    ([1, 3, 7, 5], Vec3::X),
    ([0, 1, 5, 4], Vec3::NEG_Y),
    ([2, 6, 7, 3], Vec3::Y),
    ([0, 2, 3, 1], Vec3::NEG_Z),
    ([4, 5, 7, 6], Vec3::Z),
];

/// Box edges as corner index pairs
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// World transform of a tube box (display rotation, XYZ Euler order)
pub fn box_rotation(drawable: &Drawable) -> Quat {
    let r = drawable.rotation;
    Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
}

pub fn box_transform(drawable: &Drawable) -> Mat4 {
    Mat4::from_rotation_translation(box_rotation(drawable), drawable.position)
}

/// World-space corners of a tube box
pub fn box_corners(drawable: &Drawable) -> [Vec3; 8] {
    let half = drawable.size.abs() * 0.5;
    let transform = box_transform(drawable);
    std::array::from_fn(|i| {
        let local = Vec3::new(
            if i & 1 != 0 { half.x } else { -half.x },
            if i & 2 != 0 { half.y } else { -half.y },
            if i & 4 != 0 { half.z } else { -half.z },
        );
        transform.transform_point3(local)
    })
}

enum PaintItem {
    Face {
        points: Vec<Pos2>,
        fill: egui::Color32,
        stroke: Stroke,
    },
    Edge {
        points: [Pos2; 2],
        stroke: Stroke,
    },
}

/// Paints every tube as a box
pub struct TubeSubRenderer {
    enabled: bool,
}

impl TubeSubRenderer {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    fn collect(&self, frame: &FrameContext<'_>, drawable: &Drawable, items: &mut Vec<(f32, PaintItem)>) {
        let material = TubeMaterial::for_drawable(drawable);
        let corners = box_corners(drawable);
        let projected = project_all(frame, &corners);

        if material.wireframe {
            let stroke = Stroke::new(constants::WIREFRAME_WIDTH, material.shaded(1.0));
            for (a, b) in EDGES {
                let (Some(start), Some(end)) = (projected[a], projected[b]) else {
                    continue;
                };
                items.push((
                    (start.depth + end.depth) * 0.5,
                    PaintItem::Edge {
                        points: [start.pos, end.pos],
                        stroke,
                    },
                ));
            }
            return;
        }

        let eye = frame.camera.eye();
        let rotation = box_rotation(drawable);
        for (indices, local_normal) in FACES {
            let normal = rotation * local_normal;
            let center = indices.iter().map(|&i| corners[i]).sum::<Vec3>() * 0.25;
            // Front faces only, transparent or not
            if normal.dot(eye - center) <= 0.0 {
                continue;
            }
            let Some(points) = face_points(&projected, &indices) else {
                continue;
            };

            let fill = material.shaded(frame.light.shade(normal));
            let edge = material.shaded(frame.light.shade(normal) * 0.6);
            items.push((
                center.distance(eye),
                PaintItem::Face {
                    points,
                    fill,
                    stroke: Stroke::new(constants::EDGE_WIDTH, edge),
                },
            ));
        }
    }
}

impl Default for TubeSubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRenderer for TubeSubRenderer {
    fn name(&self) -> &str {
        "tubes"
    }

    fn priority(&self) -> i32 {
        super::priorities::TUBES
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn paint(&self, frame: &FrameContext<'_>, drawables: &[Drawable]) {
        let mut items = Vec::with_capacity(drawables.len() * FACES.len());
        for drawable in drawables {
            self.collect(frame, drawable, &mut items);
        }

        items.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, item) in items {
            match item {
                PaintItem::Face {
                    points,
                    fill,
                    stroke,
                } => {
                    frame.painter.add(Shape::convex_polygon(points, fill, stroke));
                }
                PaintItem::Edge { points, stroke } => {
                    frame.painter.line_segment(points, stroke);
                }
            }
        }
    }
}

/// Project every corner; corners behind the camera are None
fn project_all(frame: &FrameContext<'_>, corners: &[Vec3; 8]) -> [Option<ScreenPoint>; 8] {
    std::array::from_fn(|i| frame.to_screen(corners[i]))
}

/// Screen polygon of a face, or None if any of its corners is behind the
/// camera
fn face_points(projected: &[Option<ScreenPoint>; 8], indices: &[usize; 4]) -> Option<Vec<Pos2>> {
    indices
        .iter()
        .map(|&i| projected[i].map(|p| p.pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tube_core::TubeId;

    fn drawable(size: Vec3, rotation: Vec3) -> Drawable {
        Drawable {
            id: TubeId(1),
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation,
            size,
            selected: false,
            joint_highlighted: false,
            wireframe: false,
        }
    }

    #[test]
    fn test_face_normals_point_outward() {
        let d = drawable(Vec3::ONE, Vec3::ZERO);
        let corners = box_corners(&d);
        for (indices, normal) in FACES {
            let center = indices.iter().map(|&i| corners[i]).sum::<Vec3>() * 0.25;
            assert!((center - d.position).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_corners_span_size() {
        let d = drawable(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let corners = box_corners(&d);
        assert_eq!(corners[0], Vec3::new(0.5, -1.0, -1.5));
        assert_eq!(corners[7], Vec3::new(1.5, 1.0, 1.5));
    }

    #[test]
    fn test_rotation_applies_to_corners() {
        let d = drawable(Vec3::new(2.0, 1.0, 1.0), Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        let corners = box_corners(&d);
        let extent_z = corners.iter().map(|c| c.z).fold(f32::MIN, f32::max);
        assert_relative_eq!(extent_z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transparent_tube_paints_front_faces_only() {
        use crate::camera::Camera;
        use crate::light::DirectionalLight;

        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let camera = Camera::looking_at(Vec3::splat(5.0), Vec3::ZERO, 4.0 / 3.0);
        let light = DirectionalLight::new();
        let frame = FrameContext::new(&painter, rect, &camera, &light);

        let mut highlighted = drawable(Vec3::ONE, Vec3::ZERO);
        highlighted.position = Vec3::ZERO;
        highlighted.joint_highlighted = true;

        let mut items = Vec::new();
        TubeSubRenderer::new().collect(&frame, &highlighted, &mut items);
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|(_, item)| matches!(item, PaintItem::Face { .. })));
    }

    #[test]
    fn test_face_with_hidden_corner_is_skipped_alone() {
        let visible = Some(ScreenPoint {
            pos: Pos2::new(1.0, 2.0),
            depth: 3.0,
        });
        let mut projected = [visible; 8];
        projected[7] = None;

        let (hidden, shown): (Vec<_>, Vec<_>) = FACES
            .iter()
            .map(|(indices, _)| face_points(&projected, indices))
            .partition(Option::is_none);
        // Corner 7 touches the +X, +Y and +Z faces
        assert_eq!(hidden.len(), 3);
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().flatten().all(|points| points.len() == 4));
    }

    #[test]
    fn test_every_edge_is_axis_aligned_in_local_space() {
        for (a, b) in EDGES {
            assert_eq!((a ^ b).count_ones(), 1);
        }
    }
}
