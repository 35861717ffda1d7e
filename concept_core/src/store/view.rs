//! Connection views - a connection resolved against the explanation map.

use concept_model::Connection;

/// A connection together with the explanation currently mapped for its pair.
///
/// Views borrow from the store, so the explanation always reflects the
/// latest write for the pair, not the text given when the connection was
/// created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionView<'a> {
    pub connection: &'a Connection,
    pub explanation: &'a str,
}

impl ConnectionView<'_> {
    pub fn source(&self) -> &str {
        self.connection.source.label()
    }

    pub fn target(&self) -> &str {
        self.connection.target.label()
    }

    pub fn label(&self) -> &str {
        &self.connection.label
    }
}
