//! Core type definitions

mod kind;
mod patch;
mod tube;

pub use kind::*;
pub use patch::*;
pub use tube::*;
