//! Error types for the registration pipeline
//!
//! - `RegistrationError`: why a single registration did not produce a user
//!
//! Neither variant is fatal. Both are turned into an `Outcome` with a status
//! code, never propagated out of a handler.

use thiserror::Error;

/// Message returned whenever the conversion stage fails
pub const CONVERSION_FAILURE_MESSAGE: &str = "Failed to create";

/// Reasons a registration can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A validator rejected the request. The reason is shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// One of the typed conversions failed. Does not say which one.
    #[error("Failed to create")]
    Conversion,
}
