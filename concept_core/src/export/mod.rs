//! Text export of a concept map.
//!
//! The export is a header line followed by one block per connection, in
//! insertion order:
//!
//! ```text
//! Concept Map:
//! Sun -> Plant (label: feeds)
//! Reason: light drives photosynthesis
//!
//! ```
//!
//! Each block shows the explanation currently mapped for its pair.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use concept_model::ExportConfig;
use thiserror::Error;
use tracing::info;

use crate::store::ConceptGraphStore;

/// Shown in place of the concept list when the map is empty.
pub const NO_CONCEPTS_PLACEHOLDER: &str = "_No concepts added yet._";

/// Errors raised while writing an export to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize every connection of `store` using `config`.
pub fn render_text(store: &ConceptGraphStore, config: &ExportConfig) -> String {
    let mut out = String::new();
    out.push_str(&config.header);
    out.push('\n');

    for view in store.connection_views() {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{} -> {} (label: {})\nReason: {}\n\n",
            view.source(),
            view.target(),
            view.label(),
            view.explanation
        );
    }

    out
}

/// Write the text export into `dir` under the store's configured file name.
///
/// Returns the path of the written file. An existing file is replaced.
pub fn write_export(store: &ConceptGraphStore, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(&store.export_config().file_name);
    let text = store.export_text();

    std::fs::write(&path, text.as_bytes()).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        connections = store.connection_count(),
        bytes = text.len(),
        "Wrote concept map export"
    );
    Ok(path)
}

/// Markdown listing of connections with their explanations quoted.
pub fn connection_listing(store: &ConceptGraphStore) -> String {
    store
        .connection_views()
        .map(|view| {
            format!(
                "**{} → {}** *(label: {})*\n> _{}_",
                view.source(),
                view.target(),
                view.label(),
                view.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Comma-separated concept labels, or a placeholder when there are none.
pub fn concept_summary(store: &ConceptGraphStore) -> String {
    if store.is_empty() {
        return NO_CONCEPTS_PLACEHOLDER.to_string();
    }

    store
        .concepts()
        .iter()
        .map(|concept| concept.label())
        .collect::<Vec<_>>()
        .join(", ")
}
