//! Preference domain service.
//!
//! Implements the preference driving ports over a [`PreferenceRepository`]
//! and enforces the ownership check on detail lookups.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    PreferenceRepository, PreferenceRepositoryError, PreferencesCommand, PreferencesQuery,
};
use crate::domain::{
    Error, Preference, PreferenceDraft, PreferenceLabel, PreferenceSummary, UserId,
};

/// Client-facing message for unknown or foreign preference labels.
pub const PREFERENCE_NOT_FOUND: &str = "Preference not found";

/// Preference service implementing [`PreferencesQuery`] and
/// [`PreferencesCommand`].
#[derive(Clone)]
pub struct PreferenceService<R> {
    repository: Arc<R>,
}

impl<R> PreferenceService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(err: PreferenceRepositoryError) -> Error {
    error!(error = %err, "preference repository failure");
    Error::internal(err.to_string())
}

#[async_trait]
impl<R> PreferencesCommand for PreferenceService<R>
where
    R: PreferenceRepository,
{
    async fn create_preference(&self, draft: PreferenceDraft) -> Result<PreferenceLabel, Error> {
        let stored = self
            .repository
            .insert(draft)
            .await
            .map_err(map_repository_error)?;
        info!(label = %stored.label, user_id = %stored.user_id, "preference saved");
        Ok(stored.label)
    }
}

#[async_trait]
impl<R> PreferencesQuery for PreferenceService<R>
where
    R: PreferenceRepository,
{
    async fn list_preferences(&self, user_id: &UserId) -> Result<Vec<PreferenceSummary>, Error> {
        let owned = self
            .repository
            .find_by_owner(user_id)
            .await
            .map_err(map_repository_error)?;
        Ok(owned.iter().map(Preference::summary).collect())
    }

    async fn fetch_preference(
        &self,
        user_id: &UserId,
        label: &PreferenceLabel,
    ) -> Result<PreferenceSummary, Error> {
        let found = self
            .repository
            .find_by_label(label)
            .await
            .map_err(map_repository_error)?;
        match found {
            Some(preference) if preference.is_owned_by(user_id) => Ok(preference.summary()),
            Some(_) => {
                debug!(%label, %user_id, "preference owned by another user");
                Err(Error::not_found(PREFERENCE_NOT_FOUND))
            }
            None => {
                debug!(%label, "preference label unknown");
                Err(Error::not_found(PREFERENCE_NOT_FOUND))
            }
        }
    }
}
