//! SubRenderer trait definition.

use tube_core::Drawable;

use crate::context::FrameContext;

/// A sub-renderer that handles a specific type of drawing.
///
/// Sub-renderers are composable units registered with the main renderer.
/// Each one is responsible for a specific visual element (grid, tubes).
///
/// # Priority
///
/// Sub-renderers are executed in order of their priority (lower values first).
/// Typical priority ranges:
/// - 0-99: Background elements (grid)
/// - 100-199: Main geometry (tubes)
/// - 200+: Overlays
pub trait SubRenderer {
    /// Returns the unique name of this sub-renderer.
    fn name(&self) -> &str;

    /// Returns the render priority (lower = painted first).
    fn priority(&self) -> i32;

    /// Returns whether this sub-renderer is currently enabled.
    fn is_enabled(&self) -> bool;

    /// Enables or disables this sub-renderer.
    fn set_enabled(&mut self, enabled: bool);

    /// Paint this element for the current frame.
    fn paint(&self, frame: &FrameContext<'_>, drawables: &[Drawable]);
}
