//! Geometry helpers: angle snapping, bounding boxes, rays and planes
//!
//! Everything here is a pure function of its inputs.

use glam::Vec3;

/// Default angles (degrees) that displayed rotations snap to
pub const DEFAULT_SNAP_ANGLES: [f32; 5] = [0.0, 45.0, 90.0, 135.0, 180.0];

/// Snap an angle in degrees to the closest candidate in `snap_set`.
///
/// Ties resolve to the earliest candidate. The difference is taken on the raw
/// values without wrapping, so 350° snaps to 180° rather than 0°. An empty
/// snap set returns the angle unchanged.
pub fn snap_angle(angle_degrees: f32, snap_set: &[f32]) -> f32 {
    let mut candidates = snap_set.iter().copied();
    let Some(first) = candidates.next() else {
        return angle_degrees;
    };

    candidates.fold(first, |closest, candidate| {
        if (candidate - angle_degrees).abs() < (closest - angle_degrees).abs() {
            candidate
        } else {
            closest
        }
    })
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Rotation used for drawing: each stored component (radians) snapped in
/// degree space and converted back. The stored rotation is left alone.
pub fn display_rotation(rotation: Vec3, snap_set: &[f32]) -> Vec3 {
    let snap = |radians: f32| degrees_to_radians(snap_angle(radians_to_degrees(radians), snap_set));
    Vec3::new(snap(rotation.x), snap(rotation.y), snap(rotation.z))
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centered at `center` with full extents `size`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overlap test on all three axes. Bounds are inclusive, so boxes that
    /// only touch on a face count as intersecting. Any NaN bound never
    /// intersects.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

/// Half-line starting at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Plane of points `p` with `normal.dot(p) + constant == 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// Horizontal plane through Y=0
    pub const GROUND: Plane = Plane {
        normal: Vec3::Y,
        constant: 0.0,
    };
}

/// Calculate ray-plane intersection.
///
/// Returns None if the ray is parallel to the plane or the plane lies behind
/// the ray origin.
pub fn ray_plane_intersection(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = ray.direction.dot(plane.normal);

    if denom.abs() < 1e-6 {
        return None;
    }

    let t = -(ray.origin.dot(plane.normal) + plane.constant) / denom;

    if t >= 0.0 { Some(ray.at(t)) } else { None }
}

/// Ray-AABB slab test.
/// Returns the distance to the first hit in front of the ray origin.
pub fn ray_aabb_intersection(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = ray.direction.recip();

    let t1 = (aabb.min - ray.origin) * inv_dir;
    let t2 = (aabb.max - ray.origin) * inv_dir;

    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}
