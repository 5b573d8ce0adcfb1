//! Profile generators.
//!
//! - [`ProfileGenerator`]: Generate synthetic user profiles from an explicit random source
//! - [`bio`]: Short biography lines composed from templates

pub mod bio;
pub mod profile;

pub use profile::{ProfileGenConfig, ProfileGenerator};
