//! Rendering - read-only graph snapshots and the adapters that draw them.
//!
//! An adapter never sees the store itself, only an owned [`GraphSnapshot`],
//! so drawing cannot mutate the map. Every adapter must place each concept
//! as a node and each connection as a directed edge labeled with its
//! connection label, and must accept snapshots with no connections or no
//! concepts at all.

mod dot;
mod json;
mod layout;

pub use dot::*;
pub use json::*;
pub use layout::*;

use concept_model::{Concept, Connection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::ConceptGraphStore;

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised by render adapters.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),
}

/// Point-in-time copy of the concepts and connections of a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub concepts: Vec<Concept>,
    pub connections: Vec<Connection>,
}

impl GraphSnapshot {
    pub fn new(concepts: Vec<Concept>, connections: Vec<Connection>) -> Self {
        Self {
            concepts,
            connections,
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl ConceptGraphStore {
    /// Snapshot the concepts and connections for rendering.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::new(self.list_concepts(), self.list_connections())
    }
}

/// Something that can draw a concept map.
pub trait RenderAdapter {
    type Output;

    fn render(&self, snapshot: &GraphSnapshot) -> RenderResult<Self::Output>;
}
