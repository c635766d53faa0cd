//! Driving port for destination reads.

use async_trait::async_trait;

use crate::domain::{Destination, DestinationId, DestinationSummary, Error};

/// Domain use-case port for reading destinations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationsQuery: Send + Sync {
    /// Every destination projected to id and name, in storage order.
    async fn list_destinations(&self) -> Result<Vec<DestinationSummary>, Error>;

    /// Full record for `id`.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] when no destination has
    /// that id.
    async fn fetch_destination(&self, id: DestinationId) -> Result<Destination, Error>;
}
