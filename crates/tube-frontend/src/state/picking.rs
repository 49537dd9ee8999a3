//! Object picking functionality

use tube_core::{Aabb, Drawable, Ray, TubeId, ray_aabb_intersection};
use tube_renderer::sub_renderers::tubes::box_transform;

/// Pick the closest tube hit by `ray`.
///
/// Each tube is tested as its displayed (rotated) box: the ray is moved into
/// the box's local frame and tested against an axis-aligned box there.
/// Returns the tube id and the hit distance along the ray.
pub fn pick_tube(ray: &Ray, drawables: &[Drawable]) -> Option<(TubeId, f32)> {
    let mut closest_hit: Option<(TubeId, f32)> = None;

    for drawable in drawables {
        let inverse = box_transform(drawable).inverse();
        let local_ray = Ray {
            origin: inverse.transform_point3(ray.origin),
            direction: inverse.transform_vector3(ray.direction),
        };
        let local_box = Aabb::from_center_size(glam::Vec3::ZERO, drawable.size.abs());

        if let Some(t) = ray_aabb_intersection(&local_ray, &local_box) {
            match closest_hit {
                None => closest_hit = Some((drawable.id, t)),
                Some((_, current_t)) if t < current_t => closest_hit = Some((drawable.id, t)),
                _ => {}
            }
        }
    }

    closest_hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn drawable(id: u32, position: Vec3, size: Vec3, rotation: Vec3) -> Drawable {
        Drawable {
            id: TubeId(id),
            position,
            rotation,
            size,
            selected: false,
            joint_highlighted: false,
            wireframe: false,
        }
    }

    #[test]
    fn test_picks_nearest_of_stacked_boxes() {
        let drawables = [
            drawable(1, Vec3::new(0.0, 0.0, -5.0), Vec3::ONE, Vec3::ZERO),
            drawable(2, Vec3::new(0.0, 0.0, -2.0), Vec3::ONE, Vec3::ZERO),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let (id, t) = pick_tube(&ray, &drawables).expect("hit");
        assert_eq!(id, TubeId(2));
        assert_relative_eq!(t, 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_miss_returns_none() {
        let drawables = [drawable(1, Vec3::new(5.0, 0.0, -5.0), Vec3::ONE, Vec3::ZERO)];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(pick_tube(&ray, &drawables).is_none());
    }

    #[test]
    fn test_rotated_box_is_picked_along_its_long_axis() {
        // 4 units long along X, turned a quarter around Y so it spans Z instead
        let long = drawable(
            1,
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(4.0, 1.0, 1.0),
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        );
        let ray = Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::NEG_Z);
        assert!(pick_tube(&ray, std::slice::from_ref(&long)).is_none());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let (_, t) = pick_tube(&ray, std::slice::from_ref(&long)).expect("hit");
        assert_relative_eq!(t, 3.0, epsilon = 1e-4);
    }
}
