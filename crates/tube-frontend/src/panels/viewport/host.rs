//! Interaction host backed by the renderer camera

use glam::Vec2;
use tube_core::{CursorStyle, InteractionHost, Ray, Viewport};
use tube_renderer::{Camera, Renderer};

/// Borrows the camera and viewport for the duration of one frame's input
pub struct ViewportHost<'a> {
    camera: &'a Camera,
    viewport: Viewport,
    cursor: &'a mut CursorStyle,
}

impl<'a> ViewportHost<'a> {
    pub fn new(renderer: &'a Renderer, cursor: &'a mut CursorStyle) -> Self {
        Self {
            camera: renderer.camera(),
            viewport: renderer.viewport(),
            cursor,
        }
    }

    /// Ray through a screen position in pixels
    pub fn ray_at(&self, screen: Vec2) -> Ray {
        self.camera.ray_from_ndc(self.viewport.screen_to_ndc(screen))
    }
}

impl InteractionHost for ViewportHost<'_> {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        self.camera.ray_from_ndc(ndc)
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        *self.cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tube_core::{InteractionController, SceneStore, TubeTemplate};
    use tube_renderer::RendererConfig;

    fn renderer() -> Renderer {
        let mut renderer = Renderer::new(&RendererConfig::default());
        renderer.resize(egui::Rect::from_min_size(
            egui::Pos2::new(10.0, 20.0),
            egui::vec2(800.0, 600.0),
        ));
        renderer
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let renderer = renderer();
        let mut cursor = CursorStyle::Auto;
        let host = ViewportHost::new(&renderer, &mut cursor);

        let ray = host.ray_at(Vec2::new(410.0, 320.0));
        let expected = (renderer.camera().target - renderer.camera().eye()).normalize();
        assert_relative_eq!(ray.direction.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(ray.direction.z, expected.z, epsilon = 1e-4);
    }

    #[test]
    fn test_drag_sets_and_clears_cursor() {
        let renderer = renderer();
        let mut cursor = CursorStyle::Auto;
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::cube(1.0));
        let mut controller = InteractionController::new();
        let id = store.selected();

        {
            let mut host = ViewportHost::new(&renderer, &mut cursor);
            assert!(controller.pointer_down(&store, &mut host, id));
            controller.pointer_move(&mut store, &mut host, Vec2::new(500.0, 400.0));
        }
        assert_eq!(cursor, CursorStyle::Grabbing);

        {
            let mut host = ViewportHost::new(&renderer, &mut cursor);
            controller.pointer_up(&mut host);
        }
        assert_eq!(cursor, CursorStyle::Auto);
    }
}
