//! Tube Editor Renderer
//!
//! Draws the tube scene into an egui painter.
//!
//! # Architecture
//!
//! - [`traits::SubRenderer`] - Trait for drawable scene elements
//! - [`registry::RendererRegistry`] - Priority-ordered sub-renderers
//! - [`camera::Camera`] - Orbit camera, projection and pointer rays
//! - [`renderer::Renderer`] - Owns camera, light and display options and
//!   paints a frame
//! - [`sub_renderers`] - Grid and tube box drawing
//! - [`material::TubeMaterial`] - Color/opacity derived from tube flags
//!
//! # Example
//!
//! ```ignore
//! use tube_renderer::{Renderer, RendererConfig};
//!
//! let mut renderer = Renderer::new(&RendererConfig::default());
//! renderer.paint(&painter, rect, &store.drawables(&snap_angles));
//! ```

// Core abstractions
pub mod context;
pub mod registry;
pub mod traits;

pub mod camera;
pub mod config;
pub mod constants;
pub mod light;
pub mod material;
pub mod renderer;
pub mod sub_renderers;

pub use camera::*;
pub use config::{CameraConfig, GridConfig, RendererConfig};
pub use context::{FrameContext, ScreenPoint};
pub use light::DirectionalLight;
pub use material::TubeMaterial;
pub use registry::RendererRegistry;
pub use renderer::*;
pub use traits::SubRenderer;
