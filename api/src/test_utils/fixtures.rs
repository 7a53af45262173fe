//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Override single fields with struct update syntax.

use serde_json::{json, Value};

use crate::domain::entities::{RawAge, RegistrationRequest};

/// A request that passes every validator and converts cleanly
pub fn valid_request() -> RegistrationRequest {
    RegistrationRequest {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        age: RawAge::from(30),
        sex_code: "F".to_string(),
        country_name: "Usa".to_string(),
    }
}

/// The wire form of [`valid_request`]
pub fn valid_request_body() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "age": 30,
        "sex": "F",
        "country": "Usa",
    })
}
