//! Profile record and demographic types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Youngest age a generated profile can have.
pub const MIN_AGE: u8 = 18;
/// Oldest age a generated profile can have.
pub const MAX_AGE: u8 = 80;
/// Number of profiles in a freshly generated batch.
pub const DEFAULT_BATCH_SIZE: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lowercase key used in filters, avatar paths and serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// One synthetic user record. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub gender: Gender,
    pub age: u8,
    /// Formatted with unit, e.g. "178 cm".
    pub height: String,
    /// Formatted with unit, e.g. "72 kg".
    pub weight: String,
    pub profession: String,
    pub bio: String,
    pub credit_card: String,
    pub avatar: String,
    pub country: String,
}

impl Profile {
    /// Joins first and last name the way every profile's `full_name` is built.
    pub fn compose_full_name(first_name: &str, last_name: &str) -> String {
        format!("{first_name} {last_name}")
    }
}
