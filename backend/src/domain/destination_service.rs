//! Destination domain service.
//!
//! Implements the destination driving ports on top of a
//! [`DestinationRepository`], translating storage failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{
    DestinationRepository, DestinationRepositoryError, DestinationsCommand, DestinationsQuery,
};
use crate::domain::{Destination, DestinationDraft, DestinationId, DestinationSummary, Error};

/// Client-facing message for unknown destination ids.
pub const DESTINATION_NOT_FOUND: &str = "Destination not found";

/// Destination service implementing [`DestinationsQuery`] and
/// [`DestinationsCommand`].
#[derive(Clone)]
pub struct DestinationService<R> {
    repository: Arc<R>,
}

impl<R> DestinationService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(err: DestinationRepositoryError) -> Error {
    error!(error = %err, "destination repository failure");
    Error::internal(err.to_string())
}

#[async_trait]
impl<R> DestinationsQuery for DestinationService<R>
where
    R: DestinationRepository,
{
    async fn list_destinations(&self) -> Result<Vec<DestinationSummary>, Error> {
        let destinations = self.repository.all().await.map_err(map_repository_error)?;
        Ok(destinations.iter().map(Destination::summary).collect())
    }

    async fn fetch_destination(&self, id: DestinationId) -> Result<Destination, Error> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        found.ok_or_else(|| {
            debug!(%id, "destination lookup missed");
            Error::not_found(DESTINATION_NOT_FOUND)
        })
    }
}

#[async_trait]
impl<R> DestinationsCommand for DestinationService<R>
where
    R: DestinationRepository,
{
    async fn create_destination(&self, draft: DestinationDraft) -> Result<Destination, Error> {
        let destination = self
            .repository
            .append(draft)
            .await
            .map_err(map_repository_error)?;
        info!(id = %destination.id, name = %destination.name, "destination created");
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockDestinationRepository;
    use crate::domain::seed::seed_destinations;
    use rstest::rstest;

    fn service(
        repository: MockDestinationRepository,
    ) -> DestinationService<MockDestinationRepository> {
        DestinationService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn list_projects_id_and_name_in_order() {
        let mut repository = MockDestinationRepository::new();
        repository
            .expect_all()
            .times(1)
            .return_once(|| Ok(seed_destinations()));

        let summaries = service(repository)
            .list_destinations()
            .await
            .expect("list succeeds");

        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Marrakesh", "Phuket", "Rome", "New York", "Rio de Janeiro"]
        );
        assert_eq!(summaries.first().map(|s| s.id.get()), Some(1));
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_missing_destination_is_not_found() {
        let mut repository = MockDestinationRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| id.get() == 999)
            .return_once(|_| Ok(None));

        let err = service(repository)
            .fetch_destination(DestinationId::new(999))
            .await
            .expect_err("missing destination");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), DESTINATION_NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn repository_failures_become_internal_errors() {
        let mut repository = MockDestinationRepository::new();
        repository
            .expect_all()
            .return_once(|| Err(DestinationRepositoryError::unavailable("lock poisoned")));

        let err = service(repository)
            .list_destinations()
            .await
            .expect_err("repository failure");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn create_returns_stored_record() {
        let mut repository = MockDestinationRepository::new();
        repository
            .expect_append()
            .times(1)
            .returning(|draft| Ok(draft.into_destination(DestinationId::new(6))));
        let draft = DestinationDraft::new("Tokyo", "temperate", "high", "Spring").expect("draft");

        let created = service(repository)
            .create_destination(draft)
            .await
            .expect("create succeeds");

        assert_eq!(created.id.get(), 6);
        assert_eq!(created.name, "Tokyo");
        assert_eq!(created.best_time, "Spring");
    }
}
