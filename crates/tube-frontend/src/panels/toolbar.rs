//! Scene toolbar

use crate::state::EditorState;

/// Toolbar buttons that need the application to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    AddTube,
    ToggleWireframe,
}

/// Render the scene toolbar and return the clicked action
pub fn render_toolbar(ui: &mut egui::Ui, state: &EditorState) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Add Tube").clicked() {
            action = Some(ToolbarAction::AddTube);
        }
        if ui.button("Toggle Wireframe").clicked() {
            action = Some(ToolbarAction::ToggleWireframe);
        }
    });

    let selected = state
        .scene
        .selected()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string());
    ui.weak(format!("{} tubes, selected: {}", state.scene.len(), selected));

    action
}

/// Apply a toolbar action to the editor
pub fn apply_toolbar_action(state: &mut EditorState, action: ToolbarAction) {
    match action {
        ToolbarAction::AddTube => {
            state.add_tube();
        }
        ToolbarAction::ToggleWireframe => state.toggle_wireframe(),
    }
}
