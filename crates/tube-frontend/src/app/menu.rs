//! Menu bar rendering

use crate::config::UiTheme;
use crate::state::EditorState;

/// Render the menu bar and return any triggered action
pub fn render_menu_bar(ctx: &egui::Context, state: &EditorState) -> Option<MenuAction> {
    let mut menu_action = None;

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Add Tube").clicked() {
                    menu_action = Some(MenuAction::AddTube);
                    ui.close_menu();
                }
                if ui.button("Toggle Wireframe").clicked() {
                    menu_action = Some(MenuAction::ToggleWireframe);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Preferences...").clicked() {
                    menu_action = Some(MenuAction::OpenPreferences);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                let mut show_grid = state.renderer.display_options().show_grid;
                if ui.checkbox(&mut show_grid, "Show Grid").changed() {
                    menu_action = Some(MenuAction::SetShowGrid(show_grid));
                    ui.close_menu();
                }
                if ui.button("Reset Camera").clicked() {
                    menu_action = Some(MenuAction::ResetCamera);
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Dark Theme").clicked() {
                    menu_action = Some(MenuAction::SetTheme(UiTheme::Dark));
                    ui.close_menu();
                }
                if ui.button("Light Theme").clicked() {
                    menu_action = Some(MenuAction::SetTheme(UiTheme::Light));
                    ui.close_menu();
                }
            });
        });
    });

    menu_action
}

/// Actions triggered by the menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    AddTube,
    ToggleWireframe,
    OpenPreferences,
    SetShowGrid(bool),
    SetTheme(UiTheme),
    ResetCamera,
}
