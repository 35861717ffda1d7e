//! Validation errors for concept map mutations.
//!
//! Every variant is a recoverable user-input error. Messages are written to
//! be shown to the user as-is.

use thiserror::Error;

/// Rejection of an `add_concept` request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddConceptError {
    /// Label is empty or whitespace only.
    #[error("Please enter a non-empty concept.")]
    EmptyLabel,

    /// A concept with exactly this label already exists.
    #[error("Concept already exists: '{0}'")]
    DuplicateConcept(String),
}

/// Rejection of an `add_connection` request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddConnectionError {
    /// An endpoint is not a known concept.
    #[error("Unknown concept: '{0}'")]
    UnknownConcept(String),

    /// Source and target are the same concept.
    #[error("Cannot connect a concept to itself: '{0}'")]
    SelfLoop(String),

    /// Connection label is empty or whitespace only.
    #[error("Please add a label for the connection.")]
    EmptyLabel,
}
