//! Registration validators
//!
//! Each validator either hands back the request untouched or names the one
//! rule it broke. `validate` chains them fail-fast; `collect_problems` runs
//! every rule and reports them all, for dry runs only.

use crate::domain::entities::RegistrationRequest;
use crate::error::RegistrationError;

/// Youngest accepted age (inclusive)
pub const MIN_AGE: f64 = 18.0;

/// Oldest accepted age (exclusive)
pub const MAX_AGE: f64 = 150.0;

/// Country whose registrations are refused outright
pub const EXCLUDED_COUNTRY: &str = "Germany";

pub const MISSING_FIELDS_MESSAGE: &str = "Not all required fields were filled in.";

pub const EXCLUDED_COUNTRY_MESSAGE: &str = "We don't like your kind around here.";

/// A single validation step
pub type Validator = fn(RegistrationRequest) -> Result<RegistrationRequest, RegistrationError>;

/// The validators in the order they run
pub const VALIDATORS: [Validator; 4] = [
    fields_not_empty,
    validate_age,
    validate_gender,
    validate_not_excluded_country,
];

pub fn fields_not_empty(
    request: RegistrationRequest,
) -> Result<RegistrationRequest, RegistrationError> {
    let filled = !request.first_name.is_empty()
        && !request.last_name.is_empty()
        && request.age.is_truthy()
        && !request.sex_code.is_empty()
        && !request.country_name.is_empty();

    if filled {
        Ok(request)
    } else {
        Err(RegistrationError::Validation(
            MISSING_FIELDS_MESSAGE.to_string(),
        ))
    }
}

pub fn validate_age(request: RegistrationRequest) -> Result<RegistrationRequest, RegistrationError> {
    match request.age.as_number() {
        Some(age) if (MIN_AGE..MAX_AGE).contains(&age) => Ok(request),
        _ => Err(RegistrationError::Validation(format!(
            "Received an invalid age of {}",
            request.age
        ))),
    }
}

pub fn validate_gender(
    request: RegistrationRequest,
) -> Result<RegistrationRequest, RegistrationError> {
    match request.sex_code.as_str() {
        "M" | "F" => Ok(request),
        other => Err(RegistrationError::Validation(format!(
            "Received an invalid sex of {}",
            other
        ))),
    }
}

pub fn validate_not_excluded_country(
    request: RegistrationRequest,
) -> Result<RegistrationRequest, RegistrationError> {
    if request.country_name == EXCLUDED_COUNTRY {
        Err(RegistrationError::Validation(
            EXCLUDED_COUNTRY_MESSAGE.to_string(),
        ))
    } else {
        Ok(request)
    }
}

/// Run every validator in order, stopping at the first failure
pub fn validate(request: RegistrationRequest) -> Result<RegistrationRequest, RegistrationError> {
    VALIDATORS.iter().try_fold(request, |request, check| check(request))
}

/// Run every validator and collect all failure reasons
///
/// Empty when the request would pass `validate`.
pub fn collect_problems(request: &RegistrationRequest) -> Vec<String> {
    VALIDATORS
        .iter()
        .filter_map(|check| check(request.clone()).err())
        .map(|err| err.to_string())
        .collect()
}
