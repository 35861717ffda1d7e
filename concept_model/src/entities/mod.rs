//! Concept definitions - the nodes of a concept map.

mod connection;

pub use connection::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A user-defined idea, identified by its exact (case-sensitive) label.
///
/// The label is stored exactly as entered; surrounding whitespace is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Concept(String);

impl Concept {
    /// Create a concept from a label without validating it.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The concept label.
    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Concept {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Concept {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Concept {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Concept {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for Concept {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Concept {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Concept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a label is unusable as a concept or connection label.
pub fn is_blank(label: &str) -> bool {
    label.trim().is_empty()
}
