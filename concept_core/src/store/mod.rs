//! Concept Graph Store - the single owner of a session's concept map.

mod view;

pub use view::*;

use concept_model::{
    is_blank, AddConceptError, AddConnectionError, Concept, Connection, ExportConfig,
    Explanations,
};
use tracing::{debug, info, warn};

use crate::export::render_text;

/// Concepts needed before a connection can be drawn.
pub const MIN_CONCEPTS_FOR_CONNECTION: usize = 2;

/// In-memory concept map: concepts, connections and their explanations.
///
/// State only grows through [`add_concept`](Self::add_concept) and
/// [`add_connection`](Self::add_connection) and is cleared as a whole by
/// [`reset`](Self::reset). A rejected add leaves every collection untouched.
///
/// There is no process-wide instance; each session constructs and owns its
/// own store.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraphStore {
    /// Concepts in insertion order, labels unique.
    concepts: Vec<Concept>,

    /// Connections in insertion order, duplicates allowed.
    connections: Vec<Connection>,

    /// Explanation per ordered pair, last write wins.
    explanations: Explanations,

    /// Settings for `export_text`; survives `reset`.
    export_config: ExportConfig,
}

impl ConceptGraphStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom export settings.
    pub fn with_export_config(export_config: ExportConfig) -> Self {
        Self {
            export_config,
            ..Self::default()
        }
    }

    pub fn export_config(&self) -> &ExportConfig {
        &self.export_config
    }

    /// Add a concept.
    ///
    /// The label is stored exactly as given; only the emptiness check trims.
    pub fn add_concept(&mut self, label: impl Into<String>) -> Result<Concept, AddConceptError> {
        let label = label.into();

        if is_blank(&label) {
            warn!("Rejected concept with empty label");
            return Err(AddConceptError::EmptyLabel);
        }
        if self.has_concept(&label) {
            warn!(concept = %label, "Rejected duplicate concept");
            return Err(AddConceptError::DuplicateConcept(label));
        }

        let concept = Concept::new(label);
        self.concepts.push(concept.clone());
        debug!(concept = %concept, total = self.concepts.len(), "Added concept");
        Ok(concept)
    }

    /// Add a connection and record its explanation for the endpoint pair.
    ///
    /// Checks run in order: both endpoints known, no self-loop, non-empty
    /// label. The explanation replaces whatever the pair had before, so
    /// earlier connections on the same pair resolve to the new text too.
    pub fn add_connection(
        &mut self,
        source: &str,
        target: &str,
        label: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Connection, AddConnectionError> {
        for endpoint in [source, target] {
            if !self.has_concept(endpoint) {
                warn!(concept = %endpoint, "Rejected connection to unknown concept");
                return Err(AddConnectionError::UnknownConcept(endpoint.to_string()));
            }
        }

        let connection = Connection::new(source, target, label);
        if connection.is_self_loop() {
            warn!(concept = %source, "Rejected self-loop connection");
            return Err(AddConnectionError::SelfLoop(source.to_string()));
        }
        if is_blank(&connection.label) {
            warn!(source = %source, target = %target, "Rejected connection with empty label");
            return Err(AddConnectionError::EmptyLabel);
        }

        if let Some(previous) = self
            .explanations
            .record(connection.pair(), explanation)
        {
            debug!(
                pair = %connection.pair(),
                previous = %previous,
                "Replaced explanation for existing pair"
            );
        }
        self.connections.push(connection.clone());
        debug!(
            source = %connection.source,
            target = %connection.target,
            label = %connection.label,
            total = self.connections.len(),
            "Added connection"
        );
        Ok(connection)
    }

    /// Snapshot of all concepts in insertion order.
    pub fn list_concepts(&self) -> Vec<Concept> {
        self.concepts.clone()
    }

    /// Snapshot of all connections in insertion order.
    pub fn list_connections(&self) -> Vec<Connection> {
        self.connections.clone()
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn explanations(&self) -> &Explanations {
        &self.explanations
    }

    /// Current explanation for `source -> target`, or `""` if none.
    pub fn explanation_for(&self, source: &str, target: &str) -> &str {
        self.explanations.get(source, target).unwrap_or_default()
    }

    /// Connections paired with their current explanation, in insertion order.
    pub fn connection_views(&self) -> impl Iterator<Item = ConnectionView<'_>> + '_ {
        self.connections.iter().map(|connection| ConnectionView {
            connection,
            explanation: self.explanations.for_connection(connection).unwrap_or_default(),
        })
    }

    /// Check if a concept with exactly this label exists.
    pub fn has_concept(&self, label: &str) -> bool {
        self.concepts.iter().any(|concept| concept == label)
    }

    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// True when the store holds no concepts (and therefore no connections).
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Whether enough concepts exist to offer a connection.
    pub fn can_connect(&self) -> bool {
        self.concepts.len() >= MIN_CONCEPTS_FOR_CONNECTION
    }

    /// Clear concepts, connections and explanations together.
    pub fn reset(&mut self) {
        info!(
            concepts = self.concepts.len(),
            connections = self.connections.len(),
            "Clearing concept map"
        );
        self.concepts.clear();
        self.connections.clear();
        self.explanations.clear();
    }

    /// Plain-text export of every connection and its current explanation.
    pub fn export_text(&self) -> String {
        render_text(self, &self.export_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concept_model::ConceptPair;

    fn store_with(labels: &[&str]) -> ConceptGraphStore {
        let mut store = ConceptGraphStore::new();
        for label in labels {
            store.add_concept(*label).unwrap();
        }
        store
    }

    #[test]
    fn test_add_concept_appends() {
        let mut store = store_with(&["Water"]);

        let concept = store.add_concept("Cloud").unwrap();

        assert_eq!(concept, Concept::new("Cloud"));
        assert_eq!(store.concept_count(), 2);
        assert_eq!(store.list_concepts().last(), Some(&Concept::new("Cloud")));
    }

    #[test]
    fn test_add_concept_preserves_order() {
        let store = store_with(&["C", "A", "B"]);
        let labels: Vec<_> = store.list_concepts().into_iter().map(Concept::into_inner).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_add_concept_rejects_empty_label() {
        let mut store = store_with(&["A"]);

        assert_eq!(store.add_concept(""), Err(AddConceptError::EmptyLabel));
        assert_eq!(store.add_concept("   "), Err(AddConceptError::EmptyLabel));
        assert_eq!(store.concept_count(), 1);
    }

    #[test]
    fn test_add_concept_rejects_duplicate() {
        let mut store = ConceptGraphStore::new();

        store.add_concept("X").unwrap();
        let result = store.add_concept("X");

        assert_eq!(result, Err(AddConceptError::DuplicateConcept("X".into())));
        assert_eq!(store.list_concepts().len(), 1);
    }

    #[test]
    fn test_add_concept_matches_exactly() {
        let mut store = store_with(&["X"]);

        assert!(store.add_concept("x").is_ok());
        assert!(store.add_concept(" X").is_ok());
        assert_eq!(store.concept_count(), 3);
    }

    #[test]
    fn test_add_connection() {
        let mut store = store_with(&["A", "B"]);

        let connection = store.add_connection("A", "B", "causes", "because").unwrap();

        assert_eq!(connection, Connection::new("A", "B", "causes"));
        assert_eq!(store.explanation_for("A", "B"), "because");
        assert!(store.list_connections().contains(&Connection::new("A", "B", "causes")));
    }

    #[test]
    fn test_add_connection_rejects_self_loop() {
        let mut store = store_with(&["A", "B"]);

        let result = store.add_connection("A", "A", "x", "");

        assert_eq!(result, Err(AddConnectionError::SelfLoop("A".into())));
        assert_eq!(store.connection_count(), 0);
        assert!(store.explanations().is_empty());
    }

    #[test]
    fn test_add_connection_rejects_empty_label() {
        let mut store = store_with(&["A", "B"]);

        let result = store.add_connection("A", "B", "  ", "reason");

        assert_eq!(result, Err(AddConnectionError::EmptyLabel));
        assert_eq!(store.connection_count(), 0);
        assert_eq!(store.explanation_for("A", "B"), "");
    }

    #[test]
    fn test_add_connection_rejects_unknown_concept() {
        let mut store = store_with(&["A", "B"]);

        assert_eq!(
            store.add_connection("A", "Z", "causes", ""),
            Err(AddConnectionError::UnknownConcept("Z".into()))
        );
        assert_eq!(
            store.add_connection("Z", "Z", "causes", ""),
            Err(AddConnectionError::UnknownConcept("Z".into()))
        );
        assert_eq!(store.connection_count(), 0);
        assert_eq!(store.concept_count(), 2);
    }

    #[test]
    fn test_failed_connection_keeps_prior_explanation() {
        let mut store = store_with(&["A", "B"]);
        store.add_connection("A", "B", "causes", "r1").unwrap();

        let result = store.add_connection("A", "B", "", "r2");

        assert!(result.is_err());
        assert_eq!(store.explanation_for("A", "B"), "r1");
        assert_eq!(store.connection_count(), 1);
    }

    #[test]
    fn test_explanation_overwrite() {
        let mut store = store_with(&["A", "B"]);

        store.add_connection("A", "B", "causes", "r1").unwrap();
        store.add_connection("A", "B", "leads to", "r2").unwrap();

        assert_eq!(store.explanation_for("A", "B"), "r2");
        assert_eq!(store.connection_count(), 2);
        assert!(store.connection_views().all(|view| view.explanation == "r2"));
    }

    #[test]
    fn test_duplicate_connections_allowed() {
        let mut store = store_with(&["A", "B"]);

        store.add_connection("A", "B", "causes", "r1").unwrap();
        store.add_connection("A", "B", "causes", "r1").unwrap();

        assert_eq!(store.connection_count(), 2);
        assert_eq!(store.explanations().len(), 1);
    }

    #[test]
    fn test_explanation_is_directional() {
        let mut store = store_with(&["A", "B"]);

        store.add_connection("A", "B", "causes", "forward").unwrap();

        assert_eq!(store.explanation_for("B", "A"), "");
        assert_eq!(store.explanation_for("A", "Missing"), "");
    }

    #[test]
    fn test_explanation_keys_follow_connections() {
        let mut store = store_with(&["A", "B", "C"]);

        store.add_connection("A", "B", "x", "1").unwrap();
        store.add_connection("B", "C", "y", "2").unwrap();
        let _ = store.add_connection("C", "C", "z", "3");

        assert_eq!(store.explanations().len(), 2);
        for connection in store.connections() {
            assert!(store.explanations().contains(&connection.pair()));
        }
        assert!(!store.explanations().contains(&ConceptPair::new("C", "C")));
    }

    #[test]
    fn test_can_connect() {
        let mut store = store_with(&["A"]);
        assert!(!store.can_connect());

        store.add_concept("B").unwrap();
        assert!(store.can_connect());
    }

    #[test]
    fn test_reset() {
        let mut store = store_with(&["A", "B"]);
        store.add_connection("A", "B", "causes", "because").unwrap();

        store.reset();

        assert!(store.is_empty());
        assert!(store.list_concepts().is_empty());
        assert!(store.list_connections().is_empty());
        assert!(store.explanations().is_empty());
        assert_eq!(store.explanation_for("A", "B"), "");
    }

    #[test]
    fn test_reset_allows_readding_concepts() {
        let mut store = store_with(&["A"]);

        store.reset();

        assert!(store.add_concept("A").is_ok());
        assert_eq!(store.concept_count(), 1);
    }

    #[test]
    fn test_reset_keeps_export_config() {
        let config = ExportConfig {
            header: "Biology:".into(),
            ..ExportConfig::default()
        };
        let mut store = ConceptGraphStore::with_export_config(config.clone());
        store.add_concept("A").unwrap();

        store.reset();

        assert_eq!(store.export_config(), &config);
        assert_eq!(store.export_text(), "Biology:\n");
    }
}
