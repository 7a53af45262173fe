//! Application layer
//!
//! Contains the registration use case.
//! Validators and conversions are pure functions; the service wires them to
//! the notifier port.

pub mod conversion;
pub mod registration_service;
pub mod validation;

pub use registration_service::{Outcome, RegistrationService};
