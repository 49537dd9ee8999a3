//! Rendering constants

/// Tube material colors (sRGB, 0-255)
pub mod material {
    pub const SELECTED_COLOR: [u8; 3] = [255, 165, 0];
    pub const DEFAULT_COLOR: [u8; 3] = [128, 128, 128];
    /// Opacity of tubes whose box overlaps another tube
    pub const HIGHLIGHT_OPACITY: f32 = 0.5;
    pub const EDGE_WIDTH: f32 = 1.0;
    pub const WIREFRAME_WIDTH: f32 = 1.5;
}

pub mod grid {
    pub const DEFAULT_SIZE: f32 = 10.0;
    pub const DEFAULT_SPACING: f32 = 1.0;
    pub const LINE_COLOR: [u8; 4] = [90, 90, 90, 160];
    pub const X_AXIS_COLOR: [u8; 4] = [200, 60, 60, 220];
    pub const Z_AXIS_COLOR: [u8; 4] = [60, 90, 220, 220];
    pub const LINE_WIDTH: f32 = 1.0;
    /// Upper bound on lines either side of an axis
    pub const MAX_LINES_PER_SIDE: i32 = 500;
}

pub mod light {
    /// Matches a key light placed at (10, 10, 5)
    pub const DIRECTION: [f32; 3] = [10.0, 10.0, 5.0];
    pub const INTENSITY: f32 = 1.0;
    pub const AMBIENT_STRENGTH: f32 = 0.3;
}
