//! Driving port for preference creation.

use async_trait::async_trait;

use crate::domain::{Error, PreferenceDraft, PreferenceLabel};

/// Domain use-case port for saving preferences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesCommand: Send + Sync {
    /// Store a validated draft under the next global label.
    async fn create_preference(&self, draft: PreferenceDraft) -> Result<PreferenceLabel, Error>;
}
