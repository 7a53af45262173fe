//! Registration notifier port
//!
//! Stands in for the persistence collaborator. The pipeline never writes a
//! user anywhere; it only announces that one now exists and could be stored.

use crate::domain::entities::RegisteredUser;

/// Receives every user the pipeline successfully registers
pub trait RegistrationNotifier: Send + Sync {
    /// Called exactly once per created user, after tier derivation.
    fn user_created(&self, user: &RegisteredUser);
}
