//! Directional light used to shade box faces

use glam::Vec3;

use crate::constants::light;

/// Directional light configuration
///
/// A directional light simulates a distant light source like the sun,
/// where all rays are parallel. Combined with a flat ambient term it gives
/// each box face a single brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Light direction (normalized, pointing toward light source)
    pub direction: Vec3,
    /// Light intensity multiplier (typically 0.0-2.0)
    pub intensity: f32,
    /// Ambient light strength (0.0-1.0)
    pub ambient_strength: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionalLight {
    /// Create a new directional light with default parameters
    pub fn new() -> Self {
        Self {
            direction: Vec3::from(light::DIRECTION).normalize(),
            intensity: light::INTENSITY,
            ambient_strength: light::AMBIENT_STRENGTH,
        }
    }

    /// Brightness factor for a surface with the given world-space normal
    pub fn shade(&self, normal: Vec3) -> f32 {
        let diffuse = normal.dot(self.direction).max(0.0) * self.intensity;
        (self.ambient_strength + diffuse).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_facing_and_away() {
        let light = DirectionalLight::new();
        assert_eq!(light.shade(light.direction), 1.0);
        assert_eq!(light.shade(-light.direction), light.ambient_strength);
    }
}
