//! Port for restoring the store to a known state.
//!
//! Used by the test hooks only. Each operation is atomic with respect to
//! concurrent reads and writes.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while resetting the store.
    pub enum StoreResetError {
        /// The backing store could not be accessed.
        Unavailable { message: String } =>
            "store unavailable during reset: {message}",
    }
}

/// Port for resetting stored state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreResetRepository: Send + Sync {
    /// Restore the seed destinations and clear every preference along with
    /// the label counter.
    async fn restore_seed(&self) -> Result<(), StoreResetError>;

    /// Clear every preference and the label counter; destinations are kept.
    async fn clear_preferences(&self) -> Result<(), StoreResetError>;
}
