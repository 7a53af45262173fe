//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Raw and validated registration shapes plus the closed vocabularies
//! - `ports`: Trait definitions for collaborators the pipeline depends on

pub mod entities;
pub mod ports;
