//! User handlers
//!
//! Endpoints for user registration.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::app::Outcome;
use crate::domain::entities::{loose_field, RawAge, RegistrationRequest};
use crate::AppState;

/// Request body for user registration
///
/// Every field is optional on the wire and accepts any JSON type. Missing,
/// `null` or falsy values become empty and are caught by the presence check
/// instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    #[serde(deserialize_with = "loose_string")]
    pub first_name: String,
    #[serde(deserialize_with = "loose_string")]
    pub last_name: String,
    /// Anything JSON; interpreted by the age validators
    pub age: Value,
    #[serde(deserialize_with = "loose_string")]
    pub sex: String,
    #[serde(deserialize_with = "loose_string")]
    pub country: String,
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(loose_field(&value))
}

impl From<RegisterUserRequest> for RegistrationRequest {
    fn from(body: RegisterUserRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            age: RawAge(body.age),
            sex_code: body.sex,
            country_name: body.country,
        }
    }
}

/// Response body for user registration
#[derive(Debug, Serialize)]
pub struct RegisterUserResponse {
    pub status: u16,
    pub message: String,
}

impl From<&Outcome> for RegisterUserResponse {
    fn from(outcome: &Outcome) -> Self {
        Self {
            status: outcome.status().as_u16(),
            message: outcome.message().to_string(),
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let body = Json(RegisterUserResponse::from(&self));
        (self.status(), body).into_response()
    }
}

/// Response body for the dry-run check
#[derive(Debug, Serialize)]
pub struct ValidateUserResponse {
    pub valid: bool,
    pub problems: Vec<String>,
}

/// POST /users/register
///
/// Register a user. The HTTP status mirrors the outcome: 201, 400 or 500.
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Outcome {
    state.registration_service.register(request.into())
}

/// POST /users/validate
///
/// Report every rule a registration would break, without registering.
pub async fn validate_user(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> (StatusCode, Json<ValidateUserResponse>) {
    let problems = state.registration_service.check(&request.into());
    let status = if problems.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (
        status,
        Json(ValidateUserResponse {
            valid: problems.is_empty(),
            problems,
        }),
    )
}
