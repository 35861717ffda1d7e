//! # Concept Model
//!
//! Value types for the concept map: concepts (nodes), connections (labeled
//! directed edges), the pair-keyed explanation map, validation errors and
//! configuration. This crate holds no store logic; `concept_core` owns the
//! mutable graph and enforces its invariants.

pub mod config;
pub mod entities;
pub mod error;
pub mod explanations;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use explanations::*;
