//! Domain entities
//!
//! The untrusted registration record and the typed user it turns into.

pub mod registration;
pub mod user;

pub use registration::{loose_field, RawAge, RegistrationRequest};
pub use user::{
    Age, CustomerTier, FirstName, Gender, LastName, Region, RegisteredUser, ValidatedUser,
};
