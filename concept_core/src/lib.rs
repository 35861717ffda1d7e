//! # Concept Core
//!
//! The engine of the concept map builder. A caller owns one
//! [`ConceptGraphStore`] per session and drives it either directly or
//! through [`Command`] values from a presentation layer.
//!
//! ## Core Components
//!
//! - **store**: The in-memory concept graph and its validation rules
//! - **commands**: Command objects dispatched synchronously to the store
//! - **export**: Plain-text export and the `concept_map.txt` download
//! - **render**: Read-only snapshots and the adapters that draw them

pub mod commands;
pub mod export;
pub mod render;
pub mod store;

pub use commands::*;
pub use export::*;
pub use render::*;
pub use store::*;

pub use concept_model;
