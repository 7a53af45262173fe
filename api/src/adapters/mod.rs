//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod logging;

pub use logging::LoggingNotifier;
