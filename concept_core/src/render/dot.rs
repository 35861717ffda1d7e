//! Graphviz DOT output.

use std::fmt::Write as _;

use super::{GraphSnapshot, RenderAdapter, RenderResult};

/// Renders a snapshot as a Graphviz `digraph`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl RenderAdapter for DotRenderer {
    type Output = String;

    fn render(&self, snapshot: &GraphSnapshot) -> RenderResult<String> {
        let mut out = String::from("digraph concept_map {\n");

        // Writing to a String cannot fail.
        for concept in &snapshot.concepts {
            let _ = writeln!(out, "    \"{}\";", escape(concept.label()));
        }
        for connection in &snapshot.connections {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(connection.source.label()),
                escape(connection.target.label()),
                escape(&connection.label)
            );
        }

        out.push_str("}\n");
        Ok(out)
    }
}

/// Escape a label for use inside a double-quoted DOT ID.
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
