//! Mock implementations of port traits
//!
//! In-memory implementations that record what they were told so tests can
//! verify behavior.

use std::sync::{Arc, RwLock};

use crate::domain::entities::RegisteredUser;
use crate::domain::ports::RegistrationNotifier;

// ============================================================================
// Recording Notifier
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    created: Arc<RwLock<Vec<RegisteredUser>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every user announced so far, oldest first
    pub fn created(&self) -> Vec<RegisteredUser> {
        self.created.read().unwrap().clone()
    }
}

impl RegistrationNotifier for RecordingNotifier {
    fn user_created(&self, user: &RegisteredUser) {
        self.created.write().unwrap().push(user.clone());
    }
}
