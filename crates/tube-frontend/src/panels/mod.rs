//! Editor panels

mod properties;
mod toolbar;
mod viewport;

pub use properties::PropertiesPanel;
pub use toolbar::{ToolbarAction, apply_toolbar_action, render_toolbar};
pub use viewport::ViewportPanel;

use crate::state::EditorState;

/// A dockable piece of editor UI
pub trait Panel {
    /// Title shown above the panel
    fn name(&self) -> &str;

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState);
}
