//! Tube Editor Frontend
//!
//! egui-based application for laying out rectangular tubes on a ground plane.

mod app;
pub mod config;
pub mod panels;
pub mod state;

pub use app::TubeEditorApp;
