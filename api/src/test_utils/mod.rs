//! Test utilities
//!
//! Hand-written test doubles and fixtures for unit testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
