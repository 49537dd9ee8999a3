//! 3D viewport panel
//!
//! Paints the scene and turns egui pointer input into controller events:
//! press, move, release, click. Presses the controller does not consume
//! orbit the camera instead.

mod host;

use egui::{CursorIcon, PointerButton, Pos2};
use glam::Vec2;
use tube_core::{CursorStyle, Drawable, InteractionController, InteractionHost, TubeId};
use tube_renderer::{CameraConfig, Renderer};

use host::ViewportHost;

use crate::panels::Panel;
use crate::state::{EditorState, pick_tube};

/// Viewport panel state
pub struct ViewportPanel {
    cursor: CursorStyle,
    /// The current primary drag started on nothing draggable
    orbiting: bool,
    orbit_speed: f32,
    zoom_speed: f32,
}

impl ViewportPanel {
    pub fn new(camera: &CameraConfig) -> Self {
        Self {
            cursor: CursorStyle::Auto,
            orbiting: false,
            orbit_speed: camera.orbit_speed,
            zoom_speed: camera.zoom_speed,
        }
    }

    fn handle_camera(&mut self, ui: &egui::Ui, response: &egui::Response, renderer: &mut Renderer) {
        let orbit_with_primary = self.orbiting && response.dragged_by(PointerButton::Primary);
        if orbit_with_primary
            || response.dragged_by(PointerButton::Secondary)
            || response.dragged_by(PointerButton::Middle)
        {
            let delta = response.drag_delta();
            renderer
                .camera_mut()
                .orbit(-delta.x * self.orbit_speed, delta.y * self.orbit_speed);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                renderer.camera_mut().zoom((-scroll * self.zoom_speed).exp());
            }
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

fn to_vec2(pos: Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

/// Tube under a screen position
fn hit_at(host: &ViewportHost<'_>, drawables: &[Drawable], pos: Pos2) -> Option<TubeId> {
    pick_tube(&host.ray_at(to_vec2(pos)), drawables).map(|(id, _)| id)
}

/// End a drag on release, or when the button is already up without a release
/// event having reached the viewport (released outside the window).
fn release_pointer<H: InteractionHost>(
    interaction: &mut InteractionController,
    host: &mut H,
    released: bool,
    primary_down: bool,
) {
    if released {
        interaction.pointer_up(host);
    } else if interaction.is_dragging() && !primary_down {
        interaction.capture_lost(host);
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "Viewport"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;

        let EditorState {
            scene,
            interaction,
            renderer,
            snap_angles,
            ..
        } = state;
        renderer.resize(rect);

        let (pressed, released, primary_down, latest_pos, moved) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
                i.pointer.delta() != egui::Vec2::ZERO,
            )
        });

        let mut hovered_tube = None;
        {
            let drawables = scene.drawables(snap_angles);
            let mut host = ViewportHost::new(renderer, &mut self.cursor);
            interaction.sync_selection(scene, &mut host);

            if pressed && response.hovered() {
                if let Some(pos) = latest_pos {
                    let hit = hit_at(&host, &drawables, pos);
                    let consumed = interaction.pointer_down(scene, &mut host, hit);
                    self.orbiting = !consumed;
                }
            }

            if interaction.is_dragging() && moved {
                if let Some(pos) = latest_pos {
                    interaction.pointer_move(scene, &mut host, to_vec2(pos));
                }
            }

            release_pointer(interaction, &mut host, released, primary_down);

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let hit = hit_at(&host, &drawables, pos);
                    interaction.click(scene, &mut host, hit);
                }
            }

            if let Some(pos) = response.hover_pos() {
                hovered_tube = hit_at(&host, &drawables, pos);
            }
        }

        if !primary_down {
            self.orbiting = false;
        }
        self.handle_camera(ui, &response, renderer);

        if self.cursor == CursorStyle::Grabbing {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if hovered_tube.is_some() && hovered_tube == scene.selected() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        let drawables = scene.drawables(snap_angles);
        renderer.paint(&painter, rect, &drawables);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tube_core::{InteractionState, SceneStore, TubeTemplate};
    use tube_renderer::RendererConfig;

    #[test]
    fn test_button_up_without_release_ends_drag() {
        let mut renderer = Renderer::new(&RendererConfig::default());
        renderer.resize(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0)));
        let store = SceneStore::with_initial_tube(&TubeTemplate::default());
        let mut interaction = InteractionController::new();
        let mut cursor = CursorStyle::Auto;
        let id = TubeId(1);

        {
            let mut host = ViewportHost::new(&renderer, &mut cursor);
            assert!(interaction.pointer_down(&store, &mut host, Some(id)));

            // Button still held: the drag continues
            release_pointer(&mut interaction, &mut host, false, true);
            assert!(interaction.is_dragging());

            release_pointer(&mut interaction, &mut host, false, false);
        }
        assert_eq!(interaction.state(), InteractionState::Armed { id });
        assert_eq!(cursor, CursorStyle::Auto);
    }
}
