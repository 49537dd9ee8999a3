//! Registry of sub-renderers painted by the main renderer.

use tube_core::Drawable;

use crate::context::FrameContext;
use crate::traits::SubRenderer;

/// Registry for managing sub-renderers.
///
/// Keeps sub-renderers sorted by priority so painting happens back to front.
pub struct RendererRegistry {
    sub_renderers: Vec<Box<dyn SubRenderer>>,
    sorted: bool,
}

impl RendererRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            sub_renderers: Vec::new(),
            sorted: true,
        }
    }

    /// Registers a new sub-renderer.
    pub fn register<R: SubRenderer + 'static>(&mut self, renderer: R) {
        self.sub_renderers.push(Box::new(renderer));
        self.sorted = false;
    }

    /// Enables or disables a sub-renderer by name.
    ///
    /// Returns false if no sub-renderer has that name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.sub_renderers.iter_mut().find(|r| r.name() == name) {
            Some(renderer) => {
                renderer.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over all sub-renderers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SubRenderer> {
        self.sub_renderers.iter().map(|r| r.as_ref())
    }

    /// Sorts sub-renderers by priority if needed.
    fn ensure_sorted(&mut self) {
        if !self.sorted {
            self.sub_renderers.sort_by_key(|r| r.priority());
            self.sorted = true;
        }
    }

    /// Paints all enabled sub-renderers in priority order.
    pub fn paint_all(&mut self, frame: &FrameContext<'_>, drawables: &[Drawable]) {
        self.ensure_sorted();
        for renderer in &self.sub_renderers {
            if renderer.is_enabled() {
                renderer.paint(frame, drawables);
            }
        }
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}
