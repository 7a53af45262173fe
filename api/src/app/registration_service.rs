//! Registration service
//!
//! Runs a raw registration through the validators, the typed conversions
//! and tier derivation, and reduces the result to an [`Outcome`].

use std::sync::Arc;

use axum::http::StatusCode;

use crate::app::{conversion, validation};
use crate::domain::entities::{RegisteredUser, RegistrationRequest, ValidatedUser};
use crate::domain::ports::RegistrationNotifier;
use crate::error::{RegistrationError, CONVERSION_FAILURE_MESSAGE};

/// Terminal result of one registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A user was registered. Carries a description of it.
    Created(String),
    /// A validator refused the request. Carries the reason.
    Rejected(String),
    /// Validation passed but the typed conversion did not.
    InternalFailure,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Created(_) => StatusCode::CREATED,
            Outcome::Rejected(_) => StatusCode::BAD_REQUEST,
            Outcome::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Created(message) | Outcome::Rejected(message) => message,
            Outcome::InternalFailure => CONVERSION_FAILURE_MESSAGE,
        }
    }
}

impl From<RegistrationError> for Outcome {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Validation(reason) => Outcome::Rejected(reason),
            RegistrationError::Conversion => Outcome::InternalFailure,
        }
    }
}

/// Attach the derived customer tier to a converted user
pub fn assemble(user: ValidatedUser) -> RegisteredUser {
    RegisteredUser::from_validated(user)
}

/// Service for registering users
pub struct RegistrationService<N>
where
    N: RegistrationNotifier,
{
    notifier: Arc<N>,
}

impl<N> RegistrationService<N>
where
    N: RegistrationNotifier,
{
    pub fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }

    /// Register a user
    ///
    /// Validators run first and stop at the first failure. Conversions only
    /// run once every validator has passed. The notifier hears about the
    /// user only when the whole pipeline succeeds.
    pub fn register(&self, request: RegistrationRequest) -> Outcome {
        match build_user(request) {
            Ok(user) => {
                self.notifier.user_created(&user);
                Outcome::Created(format!("Created {}", describe(&user)))
            }
            Err(RegistrationError::Validation(reason)) => {
                tracing::debug!(reason = reason.as_str(), "Registration rejected");
                Outcome::Rejected(reason)
            }
            Err(err @ RegistrationError::Conversion) => {
                tracing::warn!("Registration passed validation but conversion failed");
                err.into()
            }
        }
    }

    /// Report every rule the request breaks without registering anything
    pub fn check(&self, request: &RegistrationRequest) -> Vec<String> {
        validation::collect_problems(request)
    }
}

/// JSON form of the user, falling back to its plain description
fn describe(user: &RegisteredUser) -> String {
    serde_json::to_string(user).unwrap_or_else(|e| {
        tracing::warn!("Could not serialize registered user: {}", e);
        user.to_string()
    })
}

fn build_user(request: RegistrationRequest) -> Result<RegisteredUser, RegistrationError> {
    let request = validation::validate(request)?;
    let user = conversion::convert(&request).ok_or(RegistrationError::Conversion)?;
    Ok(assemble(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::validation::{EXCLUDED_COUNTRY_MESSAGE, MISSING_FIELDS_MESSAGE};
    use crate::domain::entities::{CustomerTier, RawAge, Region};
    use crate::test_utils::{valid_request, RecordingNotifier};

    fn create_service() -> (RegistrationService<RecordingNotifier>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (RegistrationService::new(notifier.clone()), notifier)
    }

    #[test]
    fn outcome_status_and_message() {
        let created = Outcome::Created("Created someone".to_string());
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(created.message(), "Created someone");

        let rejected = Outcome::Rejected("nope".to_string());
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(rejected.message(), "nope");

        assert_eq!(
            Outcome::InternalFailure.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(Outcome::InternalFailure.message(), "Failed to create");
    }

    #[test]
    fn register_success_female_is_vip() {
        let (service, notifier) = create_service();

        let outcome = service.register(valid_request());

        assert_eq!(outcome.status(), StatusCode::CREATED);
        assert_eq!(
            outcome.message(),
            r#"Created {"firstName":"Ada","lastName":"Lovelace","age":30,"gender":"F","region":"NorthAmerica","customerTier":"VIP"}"#
        );

        let created = notifier.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].customer_tier, CustomerTier::Vip);
        assert_eq!(created[0].user.region, Region::NorthAmerica);
    }

    #[test]
    fn register_success_male_is_normal() {
        let (service, notifier) = create_service();
        let request = RegistrationRequest {
            sex_code: "M".to_string(),
            ..valid_request()
        };

        let outcome = service.register(request);

        assert_eq!(outcome.status(), StatusCode::CREATED);
        assert!(outcome.message().contains(r#""customerTier":"Normal""#));
        assert_eq!(notifier.created()[0].customer_tier, CustomerTier::Normal);
    }

    #[test]
    fn register_rejects_missing_fields() {
        let (service, notifier) = create_service();
        let request = RegistrationRequest {
            last_name: String::new(),
            ..valid_request()
        };

        let outcome = service.register(request);

        assert_eq!(outcome, Outcome::Rejected(MISSING_FIELDS_MESSAGE.to_string()));
        assert!(notifier.created().is_empty());
    }

    #[test]
    fn register_rejects_out_of_range_age() {
        let (service, _) = create_service();

        for age in [17, 150] {
            let request = RegistrationRequest {
                age: RawAge::from(age),
                ..valid_request()
            };
            assert_eq!(
                service.register(request),
                Outcome::Rejected(format!("Received an invalid age of {}", age))
            );
        }
    }

    #[test]
    fn register_rejects_unknown_sex() {
        let (service, _) = create_service();
        let request = RegistrationRequest {
            sex_code: "Q".to_string(),
            ..valid_request()
        };

        assert_eq!(
            service.register(request),
            Outcome::Rejected("Received an invalid sex of Q".to_string())
        );
    }

    #[test]
    fn register_rejects_excluded_country_even_when_otherwise_valid() {
        let (service, notifier) = create_service();
        let request = RegistrationRequest {
            country_name: "Germany".to_string(),
            ..valid_request()
        };

        let outcome = service.register(request);

        assert_eq!(outcome, Outcome::Rejected(EXCLUDED_COUNTRY_MESSAGE.to_string()));
        assert_eq!(outcome.status(), StatusCode::BAD_REQUEST);
        assert!(notifier.created().is_empty());
    }

    #[test]
    fn register_reports_presence_before_other_failures() {
        let (service, _) = create_service();
        let request = RegistrationRequest {
            first_name: String::new(),
            age: RawAge::from(200),
            sex_code: "X".to_string(),
            country_name: "Belgium".to_string(),
            ..valid_request()
        };

        assert_eq!(
            service.register(request),
            Outcome::Rejected(MISSING_FIELDS_MESSAGE.to_string())
        );
    }

    #[test]
    fn register_unmapped_country_is_internal_failure() {
        let (service, notifier) = create_service();
        let request = RegistrationRequest {
            country_name: "France".to_string(),
            ..valid_request()
        };

        let outcome = service.register(request);

        assert_eq!(outcome, Outcome::InternalFailure);
        assert_eq!(outcome.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(outcome.message(), "Failed to create");
        assert!(notifier.created().is_empty());
    }

    #[test]
    fn register_numeric_string_age_fails_conversion() {
        let (service, _) = create_service();
        let request = RegistrationRequest {
            age: RawAge::from("30"),
            ..valid_request()
        };

        assert_eq!(service.register(request), Outcome::InternalFailure);
    }

    #[test]
    fn register_is_idempotent() {
        let (service, notifier) = create_service();

        let first = service.register(valid_request());
        let second = service.register(valid_request());

        assert_eq!(first, second);
        assert_eq!(notifier.created().len(), 2);
        assert_eq!(notifier.created()[0], notifier.created()[1]);
    }

    #[test]
    fn check_lists_all_problems() {
        let (service, notifier) = create_service();
        let request = RegistrationRequest {
            age: RawAge::from(10),
            sex_code: "X".to_string(),
            ..valid_request()
        };

        let problems = service.check(&request);

        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("age of 10"));
        assert!(problems[1].contains("sex of X"));
        assert!(notifier.created().is_empty());
    }
}
