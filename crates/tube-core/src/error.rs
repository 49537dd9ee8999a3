//! Error types for the editor core

use thiserror::Error;

use crate::properties::PropertyField;

/// Errors raised while applying property panel edits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("'{input}' is not a valid number for {}", .field.label())]
    InvalidNumber { field: PropertyField, input: String },

    #[error("{} is not a numeric field", .field.label())]
    NotNumeric { field: PropertyField },
}

pub type PropertyResult<T> = Result<T, PropertyError>;
