//! Port for destination storage.
//!
//! The store owns id assignment: [`DestinationRepository::append`] receives a
//! draft and returns the stored record with its new identifier, so the
//! count-then-insert step is atomic inside the adapter.

use async_trait::async_trait;

use crate::domain::{Destination, DestinationDraft, DestinationId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by destination repository adapters.
    pub enum DestinationRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } =>
            "destination store unavailable: {message}",
    }
}

/// Port for destination storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Every stored destination in insertion order.
    async fn all(&self) -> Result<Vec<Destination>, DestinationRepositoryError>;

    /// Look up a destination by id.
    async fn find_by_id(
        &self,
        id: DestinationId,
    ) -> Result<Option<Destination>, DestinationRepositoryError>;

    /// Store a draft, assigning `id = current count + 1`.
    async fn append(
        &self,
        draft: DestinationDraft,
    ) -> Result<Destination, DestinationRepositoryError>;
}
