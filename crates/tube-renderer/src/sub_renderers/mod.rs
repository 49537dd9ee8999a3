//! Built-in sub-renderers for the tube editor.
//!
//! - [`GridSubRenderer`]: Ground grid with X/Z axis lines
//! - [`TubeSubRenderer`]: Shaded or wireframe boxes for every tube

pub mod grid;
pub mod tubes;

pub use grid::GridSubRenderer;
pub use tubes::TubeSubRenderer;

/// Render priorities for sub-renderers.
///
/// Lower values are painted first (background), higher values are painted
/// on top.
pub mod priorities {
    /// Grid is painted first (background)
    pub const GRID: i32 = 0;
    /// Tubes are the main content
    pub const TUBES: i32 = 100;
}
