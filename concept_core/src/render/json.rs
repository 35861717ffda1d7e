//! JSON graph output for web graph widgets.

use concept_model::RenderConfig;
use serde::Serialize;

use super::{GraphSnapshot, RenderAdapter, RenderResult};

#[derive(Serialize)]
struct JsonNode<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct JsonLink<'a> {
    source: &'a str,
    target: &'a str,
    label: &'a str,
}

#[derive(Serialize)]
struct JsonGraph<'a> {
    nodes: Vec<JsonNode<'a>>,
    links: Vec<JsonLink<'a>>,
}

/// Renders a snapshot as `{ "nodes": [...], "links": [...] }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.pretty_json)
    }
}

impl RenderAdapter for JsonRenderer {
    type Output = String;

    fn render(&self, snapshot: &GraphSnapshot) -> RenderResult<String> {
        let graph = JsonGraph {
            nodes: snapshot
                .concepts
                .iter()
                .map(|concept| JsonNode {
                    id: concept.label(),
                })
                .collect(),
            links: snapshot
                .connections
                .iter()
                .map(|connection| JsonLink {
                    source: connection.source.label(),
                    target: connection.target.label(),
                    label: &connection.label,
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&graph)?
        } else {
            serde_json::to_string(&graph)?
        };
        Ok(json)
    }
}
