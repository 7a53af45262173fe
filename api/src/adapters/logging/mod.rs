//! Logging adapter
//!
//! Notifier that writes created users to the tracing log. Used until a
//! real user store exists.

pub mod notifier;

pub use notifier::LoggingNotifier;
