//! Connection definitions - labeled, directed edges between concepts.

use serde::{Deserialize, Serialize};

use super::Concept;

/// Ordered endpoint pair of a connection; the key of the explanation map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptPair {
    pub source: Concept,
    pub target: Concept,
}

impl ConceptPair {
    pub fn new(source: impl Into<Concept>, target: impl Into<Concept>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for ConceptPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// A directed relationship from `source` to `target`.
///
/// Connections carry no explanation of their own: explanations live in
/// [`crate::Explanations`] and are shared by every connection on the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: Concept,
    pub target: Concept,
    /// Relationship label, e.g. "causes" or "part of".
    pub label: String,
}

impl Connection {
    pub fn new(
        source: impl Into<Concept>,
        target: impl Into<Concept>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// The ordered endpoint pair of this connection.
    pub fn pair(&self) -> ConceptPair {
        ConceptPair {
            source: self.source.clone(),
            target: self.target.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
