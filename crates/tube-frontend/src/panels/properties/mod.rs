//! Properties panel for the selected tube

use std::collections::HashMap;

use tube_core::{
    PropertyError, PropertyField, Tube, TubeId, TubeKind, apply_kind, apply_text, apply_value,
    display_value, field_value,
};

use crate::panels::Panel;
use crate::state::EditorState;

/// Properties panel for editing the selected tube
///
/// Numeric fields are free text applied on every edit. Input that does not
/// parse leaves the tube unchanged and is reported below the field until it
/// loses focus. Unfocused fields are refilled whenever the scene revision
/// moves on.
pub struct PropertiesPanel {
    /// Tube the buffers were filled from
    bound_to: Option<TubeId>,
    /// Scene revision the buffers reflect
    synced_revision: Option<u64>,
    buffers: HashMap<PropertyField, String>,
    errors: HashMap<PropertyField, PropertyError>,
    /// Field that had keyboard focus last frame
    focused: Option<PropertyField>,
}

impl PropertiesPanel {
    pub fn new() -> Self {
        Self {
            bound_to: None,
            synced_revision: None,
            buffers: HashMap::new(),
            errors: HashMap::new(),
            focused: None,
        }
    }

    fn bind(&mut self, id: TubeId) {
        if self.bound_to != Some(id) {
            self.bound_to = Some(id);
            self.synced_revision = None;
            self.buffers.clear();
            self.errors.clear();
            self.focused = None;
        }
    }

    fn kind_row(&mut self, ui: &mut egui::Ui, state: &mut EditorState, tube: &Tube) {
        ui.horizontal(|ui| {
            ui.label(PropertyField::Kind.label());
            let mut kind = tube.kind;
            egui::ComboBox::from_id_salt("tube_kind")
                .selected_text(kind.display_name())
                .show_ui(ui, |ui| {
                    for option in TubeKind::all() {
                        ui.selectable_value(&mut kind, *option, option.display_name());
                    }
                });
            if kind != tube.kind {
                apply_kind(&mut state.scene, tube.id, kind);
            }
        });
    }

    fn numeric_row(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut EditorState,
        tube: &Tube,
        field: PropertyField,
        stale: bool,
    ) {
        let buffer = self.buffers.entry(field).or_default();
        // Only refresh from the tube while the user is not typing in the field
        if stale && self.focused != Some(field) {
            *buffer = display_value(tube, field);
            self.errors.remove(&field);
        }

        let mut step_by = None;
        let response = ui
            .horizontal(|ui| {
                ui.label(field.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("+").clicked() {
                        step_by = Some(field.step());
                    }
                    if ui.small_button("-").clicked() {
                        step_by = Some(-field.step());
                    }
                    ui.add(egui::TextEdit::singleline(&mut *buffer).desired_width(80.0))
                })
                .inner
            })
            .inner;

        if response.changed() {
            match apply_text(&mut state.scene, tube.id, field, buffer) {
                Ok(_) => {
                    self.errors.remove(&field);
                }
                Err(e) => {
                    tracing::debug!(field = field.label(), "Rejected input: {}", e);
                    self.errors.insert(field, e);
                }
            }
        }

        if let Some(step) = step_by {
            if let Some(current) = field_value(tube, field) {
                let value = (f64::from(current) + step) as f32;
                if apply_value(&mut state.scene, tube.id, field, value).is_ok() {
                    self.errors.remove(&field);
                }
            }
        }

        if response.has_focus() {
            self.focused = Some(field);
        } else if self.focused == Some(field) {
            self.focused = None;
            // Replace whatever was typed with the stored value next frame
            self.synced_revision = None;
        }

        if let Some(error) = self.errors.get(&field) {
            ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
        }
    }
}

impl Default for PropertiesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for PropertiesPanel {
    fn name(&self) -> &str {
        "Properties"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut EditorState) {
        let Some(tube) = state.scene.selected_tube().cloned() else {
            self.bound_to = None;
            ui.weak("No tube selected");
            return;
        };
        self.bind(tube.id);
        let revision = state.scene.revision();
        let stale = self.synced_revision != Some(revision);
        if stale {
            // Edits made this frame bump the revision again, so the next
            // frame refills every field that is not being typed in.
            self.synced_revision = Some(revision);
        }

        ui.heading(format!("Tube {}", tube.id));
        ui.separator();

        self.kind_row(ui, state, &tube);

        ui.separator();
        ui.label("Dimensions");
        for field in [
            PropertyField::Width,
            PropertyField::Height,
            PropertyField::Thickness,
            PropertyField::Length,
        ] {
            self.numeric_row(ui, state, &tube, field, stale);
        }

        ui.separator();
        ui.label("Position");
        for field in [
            PropertyField::PositionX,
            PropertyField::PositionY,
            PropertyField::PositionZ,
        ] {
            self.numeric_row(ui, state, &tube, field, stale);
        }

        ui.separator();
        ui.label("Rotation");
        for field in [
            PropertyField::RotationX,
            PropertyField::RotationY,
            PropertyField::RotationZ,
        ] {
            self.numeric_row(ui, state, &tube, field, stale);
        }

        if tube.is_joint_highlighted() {
            ui.separator();
            ui.colored_label(egui::Color32::YELLOW, "Overlaps another tube");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use tube_core::TubePatch;

    use crate::config::AppConfig;

    fn show(panel: &mut PropertiesPanel, state: &mut EditorState) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| panel.ui(ui, state));
        });
    }

    fn buffer(panel: &PropertiesPanel, field: PropertyField) -> Option<&str> {
        panel.buffers.get(&field).map(String::as_str)
    }

    #[test]
    fn test_fields_follow_scene_revision() {
        let mut state = EditorState::from_config(&AppConfig::new());
        let mut panel = PropertiesPanel::new();
        show(&mut panel, &mut state);
        assert_eq!(buffer(&panel, PropertyField::PositionX), Some("0"));
        assert_eq!(buffer(&panel, PropertyField::RotationY), Some("0.0"));
        assert_eq!(panel.synced_revision, Some(state.scene.revision()));

        let id = TubeId(1);
        state
            .scene
            .update_object(id, &TubePatch::new().with_position(Vec3::new(1.5, 0.0, 0.0)));
        show(&mut panel, &mut state);
        assert_eq!(buffer(&panel, PropertyField::PositionX), Some("1.5"));
    }

    #[test]
    fn test_unchanged_revision_keeps_buffers() {
        let mut state = EditorState::from_config(&AppConfig::new());
        let mut panel = PropertiesPanel::new();
        show(&mut panel, &mut state);

        panel.buffers.insert(PropertyField::Width, "2.5".to_string());
        show(&mut panel, &mut state);
        assert_eq!(buffer(&panel, PropertyField::Width), Some("2.5"));
    }

    #[test]
    fn test_selection_change_rebinds() {
        let mut state = EditorState::from_config(&AppConfig::new());
        let mut panel = PropertiesPanel::new();
        show(&mut panel, &mut state);

        let second = state.add_tube();
        show(&mut panel, &mut state);
        assert_eq!(panel.bound_to, Some(second));
        assert_eq!(buffer(&panel, PropertyField::PositionX), Some("2"));
    }
}
