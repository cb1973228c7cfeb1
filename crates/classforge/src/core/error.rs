//! Core error types for diagram editing
//!
//! Errors are synchronous and local: a failing operation never leaves the
//! diagram partially mutated.

use thiserror::Error;

use super::ElementId;

/// Core error types for diagram editing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("Insufficient elements: a relation needs at least {required} classes, found {found}")]
    InsufficientElements { required: usize, found: usize },

    #[error("Unknown element: no class with id {id}")]
    UnknownElement { id: ElementId },

    #[error("Unknown relation kind: {kind}")]
    UnknownRelationKind { kind: String },
}

impl DiagramError {
    /// Create a new insufficient elements error
    pub fn insufficient_elements(required: usize, found: usize) -> Self {
        Self::InsufficientElements { required, found }
    }

    /// Create a new unknown element error
    pub fn unknown_element(id: ElementId) -> Self {
        Self::UnknownElement { id }
    }

    /// Create a new unknown relation kind error
    pub fn unknown_relation_kind(kind: impl Into<String>) -> Self {
        Self::UnknownRelationKind { kind: kind.into() }
    }
}
