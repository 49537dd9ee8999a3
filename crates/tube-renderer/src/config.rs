//! Renderer configuration (persisted with the application config)

use serde::{Deserialize, Serialize};

use crate::constants::grid;
use crate::renderer::DisplayOptions;

/// Initial camera placement and projection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Radians of orbit per dragged pixel
    pub orbit_speed: f32,
    /// Zoom factor per scrolled point
    pub zoom_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [5.0, 5.0, 5.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 50.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            orbit_speed: 0.008,
            zoom_speed: 0.002,
        }
    }
}

/// Ground grid settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Half extent of the grid in world units
    pub size: f32,
    pub spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: grid::DEFAULT_SIZE,
            spacing: grid::DEFAULT_SPACING,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub display: DisplayOptions,
}
