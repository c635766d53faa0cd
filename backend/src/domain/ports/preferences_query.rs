//! Driving port for preference reads.
//!
//! Lookups are scoped to an owner. A label that exists but belongs to another
//! user is reported exactly like a missing label.

use async_trait::async_trait;

use crate::domain::{Error, PreferenceLabel, PreferenceSummary, UserId};

/// Domain use-case port for reading a user's preferences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesQuery: Send + Sync {
    /// Every preference owned by `user_id`; empty when there are none.
    async fn list_preferences(&self, user_id: &UserId) -> Result<Vec<PreferenceSummary>, Error>;

    /// The preference stored under `label` if `user_id` owns it.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] when the label is
    /// unknown or owned by someone else.
    async fn fetch_preference(
        &self,
        user_id: &UserId,
        label: &PreferenceLabel,
    ) -> Result<PreferenceSummary, Error>;
}
