//! Explanations - free-text justifications keyed by ordered concept pair.

use std::collections::HashMap;

use crate::entities::{ConceptPair, Connection};

/// Pair-keyed explanation map with last-write-wins semantics.
///
/// There is one slot per ordered `(source, target)` pair, not one per
/// connection. Recording an explanation for a pair that already has one
/// replaces it, so every connection sharing the pair resolves to the latest
/// text. Parallel connections between the same concepts are allowed and
/// share that single slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanations {
    by_pair: HashMap<ConceptPair, String>,
}

impl Explanations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the explanation for a pair, returning the text it replaced.
    pub fn record(&mut self, pair: ConceptPair, explanation: impl Into<String>) -> Option<String> {
        self.by_pair.insert(pair, explanation.into())
    }

    /// Explanation currently mapped for `source -> target`, if any.
    pub fn get(&self, source: &str, target: &str) -> Option<&str> {
        self.by_pair
            .get(&ConceptPair::new(source, target))
            .map(String::as_str)
    }

    /// Explanation for the pair a connection sits on.
    pub fn for_connection(&self, connection: &Connection) -> Option<&str> {
        self.by_pair.get(&connection.pair()).map(String::as_str)
    }

    pub fn contains(&self, pair: &ConceptPair) -> bool {
        self.by_pair.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_pair.clear();
    }
}
