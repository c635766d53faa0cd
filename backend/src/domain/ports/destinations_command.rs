//! Driving port for destination creation.

use async_trait::async_trait;

use crate::domain::{Destination, DestinationDraft, Error};

/// Domain use-case port for creating destinations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationsCommand: Send + Sync {
    /// Store a validated draft and return the record with its assigned id.
    async fn create_destination(&self, draft: DestinationDraft) -> Result<Destination, Error>;
}
