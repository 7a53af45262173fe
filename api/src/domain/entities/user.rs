//! User domain entity
//!
//! The typed user produced by the registration pipeline. Values here are
//! only ever built by the conversion stage, never taken from callers.

use std::num::NonZeroU32;

use serde::Serialize;

/// A user's first name
///
/// Distinct from [`LastName`] so the two cannot be swapped by accident.
/// The content is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FirstName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's last name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LastName(String);

impl LastName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LastName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age in whole years, always greater than zero
///
/// Only positivity is guaranteed. The 18..150 business range is enforced
/// by the validators before an `Age` is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Age(NonZeroU32);

impl Age {
    pub fn new(years: u32) -> Option<Self> {
        NonZeroU32::new(years).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Look up a gender from its one-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Region a country belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    Europe,
    NorthAmerica,
    Other,
}

impl Region {
    /// Look up the region of a country.
    ///
    /// The table is closed: unknown countries have no region rather than
    /// falling back to [`Region::Other`].
    pub fn for_country(country: &str) -> Option<Self> {
        match country {
            "Belgium" | "Germany" => Some(Region::Europe),
            "Usa" => Some(Region::NorthAmerica),
            "China" => Some(Region::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Europe => write!(f, "Europe"),
            Region::NorthAmerica => write!(f, "NorthAmerica"),
            Region::Other => write!(f, "Other"),
        }
    }
}

/// Customer tier, derived from the user and never supplied by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CustomerTier {
    Normal,
    #[serde(rename = "VIP")]
    Vip,
}

impl CustomerTier {
    /// Everyone who is not male gets VIP treatment
    pub fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => CustomerTier::Normal,
            Gender::Female => CustomerTier::Vip,
        }
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerTier::Normal => write!(f, "Normal"),
            CustomerTier::Vip => write!(f, "VIP"),
        }
    }
}

/// A user whose every field has passed validation and conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedUser {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub age: Age,
    pub gender: Gender,
    pub region: Region,
}

/// A validated user with its derived customer tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[serde(flatten)]
    pub user: ValidatedUser,
    pub customer_tier: CustomerTier,
}

impl RegisteredUser {
    /// Attach the tier that follows from the user's gender
    pub fn from_validated(user: ValidatedUser) -> Self {
        let customer_tier = CustomerTier::for_gender(user.gender);
        Self {
            user,
            customer_tier,
        }
    }
}

impl std::fmt::Display for RegisteredUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (age {}, sex {}, region {}, tier {})",
            self.user.first_name,
            self.user.last_name,
            self.user.age,
            self.user.gender,
            self.user.region,
            self.customer_tier
        )
    }
}
