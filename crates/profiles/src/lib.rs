//! Core types for the random user profile showcase.
//!
//! A batch of synthetic [`Profile`](models::Profile) records is narrowed by
//! [`FilterCriteria`](filter::FilterCriteria) into a derived view, and any single
//! profile can be exported as a structured JSON document.
//!
//! Profile generation lives in the `showcase` crate; everything here is pure data
//! and pure functions over it.

pub mod errors;
pub mod export;
pub mod fields;
pub mod filter;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::errors::{ClipboardError, ExportError, FilterParseError, GenerationError};
    pub use crate::export::{ProfileDocument, file_name, to_json};
    pub use crate::fields::{ProfileField, ProfileSection};
    pub use crate::filter::{
        AgeRange, CountryFilter, FilterCriteria, FilterUpdate, GenderFilter, countries, filter,
    };
    pub use crate::models::{DEFAULT_BATCH_SIZE, Gender, MAX_AGE, MIN_AGE, Profile};
}
