//! Commands - user intents from the presentation layer.
//!
//! A presentation layer turns each form submission or button press into a
//! [`Command`] and hands it to [`ConceptGraphStore::dispatch`]. Dispatch is
//! synchronous: the command has fully applied (or been rejected) when it
//! returns.

use concept_model::{AddConceptError, AddConnectionError, Concept, Connection};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::store::ConceptGraphStore;

/// Add a concept node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddConceptCommand {
    pub label: String,
}

/// Connect two existing concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddConnectionCommand {
    pub source: String,
    pub target: String,
    pub label: String,
    /// Why the concepts are connected; may be empty.
    #[serde(default)]
    pub explanation: String,
}

/// Clear the whole map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCommand;

/// Produce the plain-text export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCommand;

/// Any command the store accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddConcept(AddConceptCommand),
    AddConnection(AddConnectionCommand),
    Reset(ResetCommand),
    Export(ExportCommand),
}

impl Command {
    pub fn add_concept(label: impl Into<String>) -> Self {
        Command::AddConcept(AddConceptCommand {
            label: label.into(),
        })
    }

    pub fn add_connection(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Command::AddConnection(AddConnectionCommand {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            explanation: explanation.into(),
        })
    }

    pub fn reset() -> Self {
        Command::Reset(ResetCommand)
    }

    pub fn export() -> Self {
        Command::Export(ExportCommand)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddConcept(_) => "add_concept",
            Command::AddConnection(_) => "add_connection",
            Command::Reset(_) => "reset",
            Command::Export(_) => "export",
        }
    }
}

impl From<AddConceptCommand> for Command {
    fn from(command: AddConceptCommand) -> Self {
        Command::AddConcept(command)
    }
}

impl From<AddConnectionCommand> for Command {
    fn from(command: AddConnectionCommand) -> Self {
        Command::AddConnection(command)
    }
}

impl From<ResetCommand> for Command {
    fn from(command: ResetCommand) -> Self {
        Command::Reset(command)
    }
}

impl From<ExportCommand> for Command {
    fn from(command: ExportCommand) -> Self {
        Command::Export(command)
    }
}

/// Result of a successfully applied command.
///
/// `Display` renders the confirmation shown to the user; for an export it
/// is the exported text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    ConceptAdded(Concept),
    ConnectionAdded(Connection),
    Cleared,
    Exported(String),
}

impl std::fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutcome::ConceptAdded(concept) => write!(f, "Concept '{}' added!", concept),
            CommandOutcome::ConnectionAdded(connection) => write!(
                f,
                "Connection '{} → {}' added!",
                connection.source, connection.target
            ),
            CommandOutcome::Cleared => {
                f.write_str("Map cleared! Please refresh the page to start fresh.")
            }
            CommandOutcome::Exported(text) => f.write_str(text),
        }
    }
}

/// A rejected command. The store is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    AddConcept(#[from] AddConceptError),

    #[error(transparent)]
    AddConnection(#[from] AddConnectionError),
}

impl ConceptGraphStore {
    /// Apply a command to this store.
    pub fn dispatch(&mut self, command: impl Into<Command>) -> Result<CommandOutcome, CommandError> {
        let command = command.into();
        debug!(command = command.name(), "Dispatching command");

        let outcome = match command {
            Command::AddConcept(AddConceptCommand { label }) => {
                CommandOutcome::ConceptAdded(self.add_concept(label)?)
            }
            Command::AddConnection(AddConnectionCommand {
                source,
                target,
                label,
                explanation,
            }) => CommandOutcome::ConnectionAdded(self.add_connection(
                &source,
                &target,
                label,
                explanation,
            )?),
            Command::Reset(ResetCommand) => {
                self.reset();
                CommandOutcome::Cleared
            }
            Command::Export(ExportCommand) => CommandOutcome::Exported(self.export_text()),
        };

        Ok(outcome)
    }
}
