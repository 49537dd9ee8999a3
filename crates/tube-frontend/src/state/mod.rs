//! Editor state shared by the panels

mod picking;

pub use picking::pick_tube;

use tube_core::{Drawable, InteractionController, SceneStore, TubeId, TubeTemplate};
use tube_renderer::Renderer;

use crate::config::AppConfig;

/// Everything the editor mutates while running
pub struct EditorState {
    pub scene: SceneStore,
    pub interaction: InteractionController,
    pub renderer: Renderer,
    /// Rotation snap angles in degrees
    pub snap_angles: Vec<f32>,
    /// Template used by "Add Tube"
    pub tube_template: TubeTemplate,
}

impl EditorState {
    /// Fresh editor with one selected tube, built from the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let scene = SceneStore::new().with_add_offset(config.editor.add_offset());
        let mut state = Self {
            scene,
            interaction: InteractionController::new(),
            renderer: Renderer::new(&config.renderer),
            snap_angles: config.editor.snap_angles.clone(),
            tube_template: config.editor.default_tube.clone(),
        };
        state.add_tube();
        state
    }

    /// Add a tube from the current template and select it.
    pub fn add_tube(&mut self) -> TubeId {
        let id = self.scene.add_object(&self.tube_template);
        tracing::info!(%id, count = self.scene.len(), "Added tube");
        id
    }

    pub fn toggle_wireframe(&mut self) {
        self.scene.toggle_wireframe_all();
        tracing::debug!("Toggled wireframe");
    }

    /// Snapshot of the scene for painting and picking
    pub fn drawables(&self) -> Vec<Drawable> {
        self.scene.drawables(&self.snap_angles)
    }

    /// Re-read editor settings after the configuration changed.
    pub fn apply_config(&mut self, config: &AppConfig) {
        self.snap_angles = config.editor.snap_angles.clone();
        self.tube_template = config.editor.default_tube.clone();
        self.scene.set_add_offset(config.editor.add_offset());
        self.renderer.set_display_options(config.renderer.display.clone());
    }
}
