//! Application configuration module
//!
//! This module handles application-wide configuration including renderer settings,
//! editor preferences, and UI settings.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tube_core::{DEFAULT_ADD_OFFSET, DEFAULT_SNAP_ANGLES, TubeTemplate};
use tube_renderer::config::RendererConfig;

/// Editor preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Rotation snap angles in degrees
    pub snap_angles: Vec<f32>,
    /// Offset between consecutively added tubes
    pub add_offset: [f32; 3],
    /// Template for new tubes
    pub default_tube: TubeTemplate,
}

impl EditorConfig {
    pub fn add_offset(&self) -> Vec3 {
        Vec3::from(self.add_offset)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_angles: DEFAULT_SNAP_ANGLES.to_vec(),
            add_offset: DEFAULT_ADD_OFFSET.to_array(),
            default_tube: TubeTemplate::default(),
        }
    }
}

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

impl UiTheme {
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            UiTheme::Dark => egui::Visuals::dark(),
            UiTheme::Light => egui::Visuals::light(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// UI theme
    pub theme: UiTheme,
    /// Default width of the properties side panel
    pub panel_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Dark,
            panel_width: 260.0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Renderer settings
    #[serde(default)]
    pub renderer: RendererConfig,
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,
    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
