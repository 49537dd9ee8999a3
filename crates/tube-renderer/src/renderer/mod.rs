//! Main renderer painting the tube scene into an egui painter.

mod display_options;

pub use display_options::DisplayOptions;

use egui::{Painter, Rect};
use tube_core::{Drawable, Ray, Viewport};

use crate::camera::Camera;
use crate::config::RendererConfig;
use crate::context::FrameContext;
use crate::light::DirectionalLight;
use crate::registry::RendererRegistry;
use crate::sub_renderers::{GridSubRenderer, TubeSubRenderer};

/// Scene renderer: camera, light, display options and sub-renderers
pub struct Renderer {
    camera: Camera,
    light: DirectionalLight,
    display: DisplayOptions,
    registry: RendererRegistry,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(config: &RendererConfig) -> Self {
        let mut registry = RendererRegistry::new();
        registry.register(GridSubRenderer::new(&config.grid));
        registry.register(TubeSubRenderer::new());

        let mut renderer = Self {
            camera: Camera::from_config(&config.camera, 1.0),
            light: DirectionalLight::new(),
            display: DisplayOptions::default(),
            registry,
            viewport: Viewport::new(0.0, 0.0, 1.0, 1.0),
        };
        renderer.set_display_options(config.display.clone());
        renderer
    }

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn display_options(&self) -> &DisplayOptions {
        &self.display
    }

    pub fn set_display_options(&mut self, display: DisplayOptions) {
        self.registry.set_enabled("grid", display.show_grid);
        self.display = display;
    }

    /// Viewport of the last painted frame
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track the viewport rectangle and keep the camera aspect in sync.
    pub fn resize(&mut self, rect: Rect) {
        self.viewport = Viewport::new(rect.left(), rect.top(), rect.width(), rect.height());
        self.camera.update_aspect(self.viewport.aspect());
    }

    /// Ray through a point in normalized device coordinates
    pub fn ray_from_ndc(&self, ndc: glam::Vec2) -> Ray {
        self.camera.ray_from_ndc(ndc)
    }

    /// Paint a frame into `rect`.
    pub fn paint(&mut self, painter: &Painter, rect: Rect, drawables: &[Drawable]) {
        self.resize(rect);
        let frame = FrameContext::new(painter, rect, &self.camera, &self.light);
        self.registry.paint_all(&frame, drawables);
        tracing::trace!(tubes = drawables.len(), "Painted frame");
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}
