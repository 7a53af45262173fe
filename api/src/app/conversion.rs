//! Typed conversion stage
//!
//! Turns the raw fields of an already validated request into domain values.
//! Every lookup is partial and the group succeeds only as a whole; a failure
//! does not say which field was at fault.

use crate::domain::entities::{
    Age, FirstName, Gender, LastName, RawAge, Region, RegistrationRequest, ValidatedUser,
};

/// Parse the raw age as a positive whole number of years.
///
/// Only real JSON numbers qualify. A numeric string may pass the range
/// validator but is rejected here.
pub fn parse_age(raw: &RawAge) -> Option<Age> {
    let number = raw.as_json_number()?;

    let years = match number.as_u64() {
        Some(years) => years,
        None => {
            let value = number.as_f64()?;
            if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
                return None;
            }
            value as u64
        }
    };

    u32::try_from(years).ok().and_then(Age::new)
}

pub fn find_gender(code: &str) -> Option<Gender> {
    Gender::from_code(code)
}

pub fn find_region(country: &str) -> Option<Region> {
    Region::for_country(country)
}

/// Convert all five fields, or nothing at all
pub fn convert(request: &RegistrationRequest) -> Option<ValidatedUser> {
    let first_name = FirstName::new(request.first_name.as_str());
    let last_name = LastName::new(request.last_name.as_str());
    let age = parse_age(&request.age)?;
    let gender = find_gender(&request.sex_code)?;
    let region = find_region(&request.country_name)?;

    Some(ValidatedUser {
        first_name,
        last_name,
        age,
        gender,
        region,
    })
}
