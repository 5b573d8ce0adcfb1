//! Random user profile showcase.
//!
//! Generates batches of synthetic user profiles, narrows them with filters and
//! lets a single profile be inspected, copied field by field, or downloaded as a
//! JSON document.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use showcase::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
//! let mut showcase = Showcase::new(ProfileGenerator::new(), DEFAULT_BATCH_SIZE, &mut rng)?;
//!
//! showcase.update_filters(FilterUpdate::gender(GenderFilter::Female));
//! showcase.update_filters(FilterUpdate::age_range(25, 40));
//! for profile in showcase.view().profiles() {
//!     println!("{} ({})", profile.full_name, profile.age);
//! }
//! ```

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod generators;
pub mod notify;
pub mod render;
pub mod state;

// Re-export core types from profiles crate
pub use profiles::models::{DEFAULT_BATCH_SIZE, Gender, Profile};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::clipboard::{Clipboard, CommandClipboard, MemoryClipboard, NoClipboard};
    pub use crate::commands::{Command, CommandError};
    pub use crate::config::ShowcaseConfig;
    pub use crate::generators::{ProfileGenConfig, ProfileGenerator};
    pub use crate::notify::{Toast, ToastKind};
    pub use crate::state::{DerivedView, FilterPanel, ModalState, Showcase};
    pub use crate::{DEFAULT_BATCH_SIZE, Gender, Profile};
    pub use profiles::fields::ProfileField;
    pub use profiles::filter::{AgeRange, CountryFilter, FilterCriteria, FilterUpdate, GenderFilter};
}
