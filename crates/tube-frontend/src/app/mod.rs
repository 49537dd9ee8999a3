//! Main application

mod menu;
mod preferences;

pub use menu::MenuAction;
use preferences::PreferencesWindow;

use tube_renderer::Camera;

use crate::config::{ConfigManager, SharedConfig, UiTheme, create_shared_config};
use crate::panels::{
    Panel, PropertiesPanel, ToolbarAction, ViewportPanel, apply_toolbar_action, render_toolbar,
};
use crate::state::EditorState;

/// Tube editor application
pub struct TubeEditorApp {
    state: EditorState,
    config: SharedConfig,
    properties: PropertiesPanel,
    viewport: ViewportPanel,
    preferences: PreferencesWindow,
}

impl TubeEditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config();
        let app = Self::with_config(config);
        cc.egui_ctx
            .set_visuals(app.config.read().config().ui.theme.visuals());
        app
    }

    pub fn with_config(config: SharedConfig) -> Self {
        let (state, viewport) = {
            let manager = config.read();
            let app_config = manager.config();
            (
                EditorState::from_config(app_config),
                ViewportPanel::new(&app_config.renderer.camera),
            )
        };

        Self {
            state,
            config,
            properties: PropertiesPanel::new(),
            viewport,
            preferences: PreferencesWindow::default(),
        }
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::AddTube => apply_toolbar_action(&mut self.state, ToolbarAction::AddTube),
            MenuAction::ToggleWireframe => {
                apply_toolbar_action(&mut self.state, ToolbarAction::ToggleWireframe)
            }
            MenuAction::OpenPreferences => {
                self.preferences.open(self.config.read().config());
            }
            MenuAction::SetShowGrid(show) => {
                let mut manager = self.config.write();
                manager.config_mut().renderer.display.set_show_grid(show);
                self.state.apply_config(manager.config());
                save_config(&mut manager);
            }
            MenuAction::SetTheme(theme) => {
                ctx.set_visuals(theme.visuals());
                let mut manager = self.config.write();
                if manager.config().ui.theme != theme {
                    manager.config_mut().ui.theme = theme;
                    save_config(&mut manager);
                }
            }
            MenuAction::ResetCamera => {
                let manager = self.config.read();
                let camera = self.state.renderer.camera_mut();
                let aspect = camera.aspect;
                *camera = Camera::from_config(&manager.config().renderer.camera, aspect);
            }
        }
    }

    fn theme(&self) -> UiTheme {
        self.config.read().config().ui.theme
    }
}

fn save_config(manager: &mut ConfigManager) {
    if let Err(e) = manager.save() {
        tracing::error!("Failed to save config: {}", e);
    }
}

impl eframe::App for TubeEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = menu::render_menu_bar(ctx, &self.state) {
            self.handle_menu_action(ctx, action);
        }

        let panel_width = self.config.read().config().ui.panel_width;
        egui::SidePanel::left("properties_panel")
            .default_width(panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                egui::TopBottomPanel::bottom("scene_toolbar").show_inside(ui, |ui| {
                    if let Some(action) = render_toolbar(ui, &self.state) {
                        apply_toolbar_action(&mut self.state, action);
                    }
                });
                ui.heading(self.properties.name());
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.properties.ui(ui, &mut self.state);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(match self.theme() {
                UiTheme::Dark => egui::Color32::from_gray(32),
                UiTheme::Light => egui::Color32::from_gray(225),
            }))
            .show(ctx, |ui| {
                self.viewport.ui(ui, &mut self.state);
            });

        self.preferences.show(ctx, &self.config, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::RwLock;
    use tube_core::TubeId;

    fn app() -> TubeEditorApp {
        let path = std::env::temp_dir()
            .join(format!("tube-editor-app-test-{}", std::process::id()))
            .join("config.ron");
        TubeEditorApp::with_config(Arc::new(RwLock::new(ConfigManager::with_path(path))))
    }

    #[test]
    fn test_menu_actions_reach_scene() {
        let ctx = egui::Context::default();
        let mut app = app();
        assert_eq!(app.state.scene.selected(), Some(TubeId(1)));

        app.handle_menu_action(&ctx, MenuAction::AddTube);
        assert_eq!(app.state.scene.len(), 2);

        app.handle_menu_action(&ctx, MenuAction::ToggleWireframe);
        assert!(app.state.drawables().iter().all(|d| d.wireframe));
    }

    #[test]
    fn test_reset_camera_restores_configured_view() {
        let ctx = egui::Context::default();
        let mut app = app();
        let initial = *app.state.renderer.camera();

        app.state.renderer.camera_mut().orbit(1.0, 0.3);
        app.handle_menu_action(&ctx, MenuAction::ResetCamera);
        assert_eq!(*app.state.renderer.camera(), initial);
    }
}
