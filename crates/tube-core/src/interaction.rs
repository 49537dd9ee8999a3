//! Pointer interaction: selecting tubes and dragging them on the ground plane.
//!
//! The controller is an explicit state machine keyed by tube id. It never
//! holds on to tube data between events; every event re-reads the store, so a
//! selection change between two events can not leave a stale drag behind.

use glam::{Vec2, Vec3};

use crate::geometry::{Plane, Ray, ray_plane_intersection};
use crate::scene::SceneStore;
use crate::types::{TubeId, TubePatch};

/// Pointer interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Nothing selected
    #[default]
    Idle,
    /// A tube is selected and ready to be dragged
    Armed { id: TubeId },
    /// The selected tube follows the pointer
    Dragging { id: TubeId },
}

impl InteractionState {
    /// Tube this state is attached to, if any
    pub fn target(&self) -> Option<TubeId> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Armed { id } | InteractionState::Dragging { id } => Some(*id),
        }
    }
}

/// Cursor shape requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Auto,
    Grabbing,
}

/// Viewport rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a screen position to normalized device coordinates (Y up).
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            ((screen.x - self.left) / self.width) * 2.0 - 1.0,
            -((screen.y - self.top) / self.height) * 2.0 + 1.0,
        )
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// What the controller needs from the window/renderer hosting it
pub trait InteractionHost {
    /// Current viewport rectangle
    fn viewport(&self) -> Viewport;

    /// Cast a ray from the camera through a point in normalized device
    /// coordinates
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray;

    /// Cursor hook called on drag start and end
    fn set_cursor(&mut self, _cursor: CursorStyle) {}
}

/// Translates pointer events into tube selection and position updates
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    drag_plane: Plane,
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            drag_plane: Plane::GROUND,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging { .. })
    }

    /// Re-arm for the store's current selection.
    ///
    /// Any drag attached to a tube that is no longer selected is dropped.
    pub fn sync_selection<H: InteractionHost>(&mut self, store: &SceneStore, host: &mut H) {
        let selected = store.selected().filter(|id| store.contains(*id));
        if self.state.target() == selected {
            return;
        }

        if let InteractionState::Dragging { id } = self.state {
            tracing::debug!(%id, "Dropping drag of deselected tube");
            host.set_cursor(CursorStyle::Auto);
        }

        self.state = match selected {
            Some(id) => InteractionState::Armed { id },
            None => InteractionState::Idle,
        };
    }

    /// Click on `target` (the tube under the pointer, if any).
    ///
    /// Clicking a tube selects it. Clicking empty space keeps the selection.
    pub fn click<H: InteractionHost>(
        &mut self,
        store: &mut SceneStore,
        host: &mut H,
        target: Option<TubeId>,
    ) {
        if let Some(id) = target {
            store.select(id);
        }
        self.sync_selection(store, host);
    }

    /// Pointer pressed over `target`.
    ///
    /// Starts a drag when `target` is the selected tube. Returns true if the
    /// press was consumed.
    pub fn pointer_down<H: InteractionHost>(
        &mut self,
        store: &SceneStore,
        host: &mut H,
        target: Option<TubeId>,
    ) -> bool {
        self.sync_selection(store, host);

        match (self.state, target) {
            (InteractionState::Armed { id }, Some(hit)) if hit == id => {
                tracing::debug!(%id, "Drag started");
                self.state = InteractionState::Dragging { id };
                host.set_cursor(CursorStyle::Grabbing);
                true
            }
            (InteractionState::Dragging { .. }, _) => true,
            _ => false,
        }
    }

    /// Pointer moved to `screen` (pixels).
    ///
    /// While dragging, moves the tube to where the pointer ray meets the
    /// ground plane. Only X and Z change; the tube's height above the plane is
    /// kept. Returns the new position, or None if nothing moved.
    pub fn pointer_move<H: InteractionHost>(
        &mut self,
        store: &mut SceneStore,
        host: &mut H,
        screen: Vec2,
    ) -> Option<Vec3> {
        self.sync_selection(store, host);

        let InteractionState::Dragging { id } = self.state else {
            return None;
        };

        let ndc = host.viewport().screen_to_ndc(screen);
        let ray = host.ray_from_ndc(ndc);
        let hit = ray_plane_intersection(&ray, &self.drag_plane)?;

        let current = store.get(id)?.position;
        let position = Vec3::new(hit.x, current.y, hit.z);
        store.update_object(id, &TubePatch::new().with_position(position));
        Some(position)
    }

    /// Pointer released anywhere.
    pub fn pointer_up<H: InteractionHost>(&mut self, host: &mut H) {
        if let InteractionState::Dragging { id } = self.state {
            tracing::debug!(%id, "Drag finished");
            self.state = InteractionState::Armed { id };
            host.set_cursor(CursorStyle::Auto);
        }
    }

    /// Pointer capture lost (window lost focus, pointer left, ...).
    pub fn capture_lost<H: InteractionHost>(&mut self, host: &mut H) {
        self.pointer_up(host);
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}
