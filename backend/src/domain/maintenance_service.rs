//! Store maintenance service backing the reset hooks.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::Error;
use crate::domain::ports::{StoreMaintenance, StoreResetError, StoreResetRepository};

/// Implements [`StoreMaintenance`] over a [`StoreResetRepository`].
#[derive(Clone)]
pub struct StoreMaintenanceService<R> {
    repository: Arc<R>,
}

impl<R> StoreMaintenanceService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_reset_error(err: StoreResetError) -> Error {
    error!(error = %err, "store reset failed");
    Error::internal(err.to_string())
}

#[async_trait]
impl<R> StoreMaintenance for StoreMaintenanceService<R>
where
    R: StoreResetRepository,
{
    async fn reset_all(&self) -> Result<(), Error> {
        self.repository
            .restore_seed()
            .await
            .map_err(map_reset_error)?;
        info!("store restored to seed state");
        Ok(())
    }

    async fn reset_preferences(&self) -> Result<(), Error> {
        self.repository
            .clear_preferences()
            .await
            .map_err(map_reset_error)?;
        info!("preferences cleared");
        Ok(())
    }
}
