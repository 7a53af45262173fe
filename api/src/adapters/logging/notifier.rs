//! Tracing-backed registration notifier

use crate::domain::entities::RegisteredUser;
use crate::domain::ports::RegistrationNotifier;

/// Logs each created user as a JSON payload
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl RegistrationNotifier for LoggingNotifier {
    fn user_created(&self, user: &RegisteredUser) {
        match serde_json::to_string(user) {
            Ok(payload) => {
                tracing::info!(user = %payload, "Created user. Could now save in db.")
            }
            Err(e) => {
                tracing::warn!(user = %user, "Created user but could not serialize it: {}", e)
            }
        }
    }
}
