//! Application state container.
//!
//! [`Showcase`] owns the current batch, the filter criteria and the ephemeral UI
//! state (modal, filter panel, pending toasts). The filtered view and the country
//! vocabulary are derived on every call from the batch and the criteria.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use profiles::errors::{ClipboardError, ExportError, GenerationError};
use profiles::export;
use profiles::fields::ProfileField;
use profiles::filter::{self, CountryFilter, FilterCriteria, FilterUpdate};
use profiles::models::Profile;

use crate::clipboard::Clipboard;
use crate::generators::ProfileGenerator;
use crate::notify::{Notifications, Toast};

/// Detail modal state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Profile),
}

impl ModalState {
    pub fn selected(&self) -> Option<&Profile> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(profile) => Some(profile),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

/// Visibility of the filter panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterPanel {
    #[default]
    Hidden,
    Shown,
}

impl FilterPanel {
    pub fn toggled(self) -> Self {
        match self {
            FilterPanel::Hidden => FilterPanel::Shown,
            FilterPanel::Shown => FilterPanel::Hidden,
        }
    }
}

/// Profiles currently rendered, plus whether any criterion narrowed them.
#[derive(Debug)]
pub struct DerivedView<'a> {
    profiles: Vec<&'a Profile>,
    restricted: bool,
}

impl<'a> DerivedView<'a> {
    pub(crate) fn new(profiles: Vec<&'a Profile>, restricted: bool) -> Self {
        Self {
            profiles,
            restricted,
        }
    }

    pub fn profiles(&self) -> &[&'a Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// True when the criteria narrow the batch at all.
    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Active criteria matched nothing, as opposed to an unfiltered view.
    pub fn no_matches(&self) -> bool {
        self.restricted && self.profiles.is_empty()
    }

    /// Profile at a 1-based card position.
    pub fn get(&self, position: usize) -> Option<&'a Profile> {
        position
            .checked_sub(1)
            .and_then(|i| self.profiles.get(i))
            .copied()
    }
}

pub struct Showcase {
    generator: ProfileGenerator,
    batch_size: usize,
    batch: Vec<Profile>,
    criteria: FilterCriteria,
    modal: ModalState,
    filter_panel: FilterPanel,
    notifications: Notifications,
}

impl Showcase {
    /// Generates the initial batch. With no prior batch to fall back on, a
    /// generation failure is returned to the caller.
    pub fn new(
        generator: ProfileGenerator,
        batch_size: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GenerationError> {
        let batch = generator.generate_batch(batch_size, rng)?;
        info!("Loaded {} profiles", batch.len());

        Ok(Self {
            generator,
            batch_size,
            batch,
            criteria: FilterCriteria::default(),
            modal: ModalState::default(),
            filter_panel: FilterPanel::default(),
            notifications: Notifications::default(),
        })
    }

    pub fn batch(&self) -> &[Profile] {
        &self.batch
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn filter_panel(&self) -> FilterPanel {
        self.filter_panel
    }

    /// Replaces the whole batch with freshly generated profiles.
    ///
    /// On success the modal closes, since its profile belonged to the discarded
    /// batch. On failure batch, criteria and modal are left untouched and a
    /// failure toast is queued.
    pub fn regenerate(&mut self, rng: &mut impl Rng) -> Result<(), GenerationError> {
        match self.generator.generate_batch(self.batch_size, rng) {
            Ok(batch) => {
                self.batch = batch;
                if self.modal.is_open() {
                    debug!("Closing modal for a profile of the discarded batch");
                    self.modal = ModalState::Closed;
                }
                info!("Regenerated {} profiles", self.batch.len());
                Ok(())
            }
            Err(e) => {
                warn!("Keeping previous batch: {e}");
                self.notifications
                    .push(Toast::failure("Failed to generate new profiles"));
                Err(e)
            }
        }
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.criteria.apply(update);
        debug!("Filters now {:?}", self.criteria);
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn toggle_filter_panel(&mut self) -> FilterPanel {
        self.filter_panel = self.filter_panel.toggled();
        self.filter_panel
    }

    /// Profiles of the current batch passing the current criteria.
    pub fn view(&self) -> DerivedView<'_> {
        DerivedView::new(
            filter::filter(&self.batch, &self.criteria),
            !self.criteria.is_unrestricted(),
        )
    }

    /// Country choices for the current batch, sentinel first.
    pub fn countries(&self) -> Vec<CountryFilter> {
        filter::countries(&self.batch)
    }

    /// Opens the detail modal for a profile of the current batch.
    ///
    /// Returns `false` and leaves the state alone for an unknown id.
    pub fn select(&mut self, id: Uuid) -> bool {
        match self.batch.iter().find(|p| p.id == id) {
            Some(profile) => {
                self.modal = ModalState::Open(profile.clone());
                true
            }
            None => {
                debug!("No profile {id} in the current batch");
                false
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Copies one field of the selected profile. A no-op while the modal is closed.
    pub async fn copy_field(
        &mut self,
        field: ProfileField,
        clipboard: &dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        let Some(profile) = self.modal.selected() else {
            return Ok(());
        };

        match clipboard.write_text(&field.value(profile)).await {
            Ok(()) => {
                self.notifications
                    .push(Toast::success(format!("{} copied to clipboard", field.label())));
                Ok(())
            }
            Err(e) => {
                warn!("Clipboard write failed: {e}");
                self.notifications
                    .push(Toast::failure("Failed to copy to clipboard"));
                Err(e)
            }
        }
    }

    /// Saves the selected profile's export document into `dir` and closes the
    /// modal. On failure the modal stays open.
    pub async fn download(&mut self, dir: &Path) -> Result<PathBuf, ExportError> {
        let profile = self.modal.selected().ok_or(ExportError::NothingSelected)?;
        let path = dir.join(export::file_name(profile));

        let result = match export::to_json(profile) {
            Ok(json) => tokio::fs::write(&path, json)
                .await
                .map_err(ExportError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                info!("Saved profile to {}", path.display());
                self.notifications
                    .push(Toast::success(format!("Saved {}", path.display())));
                self.modal = ModalState::Closed;
                Ok(path)
            }
            Err(e) => {
                self.notifications
                    .push(Toast::failure(format!("Failed to save profile: {e}")));
                Err(e)
            }
        }
    }

    pub fn drain_notifications(&mut self) -> Vec<Toast> {
        self.notifications.drain()
    }
}
