//! Preferences window

use crate::config::{AppConfig, SharedConfig, UiTheme};
use crate::state::EditorState;

/// Parse a comma separated list of snap angles in degrees.
pub fn parse_snap_angles(input: &str) -> Result<Vec<f32>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(format!("'{s}' is not a valid angle")),
        })
        .collect()
}

fn format_snap_angles(angles: &[f32]) -> String {
    angles
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Editor preferences dialog
#[derive(Default)]
pub struct PreferencesWindow {
    open: bool,
    snap_text: String,
    snap_error: Option<String>,
}

impl PreferencesWindow {
    pub fn open(&mut self, config: &AppConfig) {
        self.open = true;
        self.snap_text = format_snap_angles(&config.editor.snap_angles);
        self.snap_error = None;
    }

    pub fn show(&mut self, ctx: &egui::Context, config: &SharedConfig, state: &mut EditorState) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        let mut changed = false;
        let mut save = false;
        let mut reset = false;

        egui::Window::new("Preferences")
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                let mut manager = config.write();

                ui.heading("Editor");
                ui.horizontal(|ui| {
                    ui.label("Snap angles:");
                    if ui.text_edit_singleline(&mut self.snap_text).changed() {
                        match parse_snap_angles(&self.snap_text) {
                            Ok(angles) => {
                                manager.config_mut().editor.snap_angles = angles;
                                self.snap_error = None;
                                changed = true;
                            }
                            Err(e) => self.snap_error = Some(e),
                        }
                    }
                });
                if let Some(error) = &self.snap_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }

                let mut offset = manager.config().editor.add_offset;
                ui.horizontal(|ui| {
                    ui.label("Add offset:");
                    for component in offset.iter_mut() {
                        ui.add(egui::DragValue::new(component).speed(0.1));
                    }
                });
                if offset != manager.config().editor.add_offset {
                    manager.config_mut().editor.add_offset = offset;
                    changed = true;
                }

                let mut template = manager.config().editor.default_tube.clone();
                ui.collapsing("New tube", |ui| {
                    egui::Grid::new("default_tube").num_columns(2).show(ui, |ui| {
                        for (label, value) in [
                            ("Width", &mut template.width),
                            ("Height", &mut template.height),
                            ("Length", &mut template.length),
                            ("Thickness", &mut template.thickness),
                        ] {
                            ui.label(label);
                            ui.add(egui::DragValue::new(value).speed(0.05));
                            ui.end_row();
                        }
                    });
                });
                if template != manager.config().editor.default_tube {
                    manager.config_mut().editor.default_tube = template;
                    changed = true;
                }

                ui.separator();
                ui.heading("Appearance");
                let mut theme = manager.config().ui.theme;
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut theme, UiTheme::Dark, "Dark");
                    ui.selectable_value(&mut theme, UiTheme::Light, "Light");
                });
                if theme != manager.config().ui.theme {
                    manager.config_mut().ui.theme = theme;
                    ctx.set_visuals(theme.visuals());
                }

                let mut show_grid = manager.config().renderer.display.show_grid;
                if ui.checkbox(&mut show_grid, "Show grid").changed() {
                    manager.config_mut().renderer.display.set_show_grid(show_grid);
                    changed = true;
                }

                ui.separator();
                ui.horizontal(|ui| {
                    save = ui
                        .add_enabled(manager.is_dirty(), egui::Button::new("Save"))
                        .clicked();
                    reset = ui.button("Reset to Defaults").clicked();
                });
                ui.weak(format!("{}", manager.config_file_path().display()));
            });

        if reset {
            let mut manager = config.write();
            manager.reset_to_defaults();
            ctx.set_visuals(manager.config().ui.theme.visuals());
            self.snap_text = format_snap_angles(&manager.config().editor.snap_angles);
            self.snap_error = None;
            changed = true;
        }

        if changed {
            state.apply_config(config.read().config());
        }

        if save {
            if let Err(e) = config.write().save() {
                tracing::error!("Failed to save config: {}", e);
            }
        }

        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snap_angles() {
        assert_eq!(
            parse_snap_angles("0, 45,90 ,"),
            Ok(vec![0.0, 45.0, 90.0])
        );
        assert_eq!(parse_snap_angles(""), Ok(vec![]));
        assert!(parse_snap_angles("0, abc").is_err());
        assert!(parse_snap_angles("inf").is_err());
    }

    #[test]
    fn test_format_round_trips() {
        let angles = vec![0.0, 22.5, 90.0];
        assert_eq!(parse_snap_angles(&format_snap_angles(&angles)), Ok(angles));
    }
}
