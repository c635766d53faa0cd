//! Port for preference storage.
//!
//! Adapters own the global label counter. [`PreferenceRepository::insert`]
//! increments it and stores the record under the derived label in one step.

use async_trait::async_trait;

use crate::domain::{Preference, PreferenceDraft, PreferenceLabel, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by preference repository adapters.
    pub enum PreferenceRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } =>
            "preference store unavailable: {message}",
    }
}

/// Port for preference storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Label and store a draft, returning the stored record.
    async fn insert(
        &self,
        draft: PreferenceDraft,
    ) -> Result<Preference, PreferenceRepositoryError>;

    /// Preferences owned by `user_id`, in insertion order.
    async fn find_by_owner(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Preference>, PreferenceRepositoryError>;

    /// Look up a preference by label regardless of owner.
    async fn find_by_label(
        &self,
        label: &PreferenceLabel,
    ) -> Result<Option<Preference>, PreferenceRepositoryError>;
}
