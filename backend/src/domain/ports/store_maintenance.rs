//! Driving port behind the test-support reset endpoints.

use async_trait::async_trait;

use crate::domain::Error;

/// Domain use-case port for restoring a known store state between tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreMaintenance: Send + Sync {
    /// Restore seed destinations and clear all preferences.
    async fn reset_all(&self) -> Result<(), Error>;

    /// Clear all preferences and restart label numbering at 1.
    async fn reset_preferences(&self) -> Result<(), Error>;
}
