//! Display options for controlling visibility of rendering elements.

use serde::{Deserialize, Serialize};

/// Display options for controlling visibility of rendering elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayOptions {
    /// Whether the ground grid is visible.
    pub show_grid: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { show_grid: true }
    }
}

impl DisplayOptions {
    /// Set whether the grid is visible.
    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }
}
