//! Tube Editor Core
//!
//! This crate contains everything the editor does that does not need a window:
//! - Tube: the parametric box entity and its partial-update patch
//! - Geometry: angle snapping, AABBs, rays and the ground plane
//! - SceneStore: the single owner of all tubes and the selection
//! - InteractionController: pointer-driven dragging on the ground plane
//! - PropertyPanel: field editing with degree/radian conversion

pub mod error;
pub mod geometry;
pub mod interaction;
pub mod properties;
pub mod scene;
pub mod types;

pub use error::*;
pub use geometry::*;
pub use interaction::*;
pub use properties::*;
pub use scene::*;
pub use types::*;
