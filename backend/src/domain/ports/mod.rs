//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`, [`StoreMaintenance`]) are what HTTP
//! handlers call. Driven ports (`*Repository`) are what storage adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod destination_repository;
mod destinations_command;
mod destinations_query;
mod preference_repository;
mod preferences_command;
mod preferences_query;
mod store_maintenance;
mod store_reset_repository;

#[cfg(test)]
pub use destination_repository::MockDestinationRepository;
pub use destination_repository::{DestinationRepository, DestinationRepositoryError};
#[cfg(test)]
pub use destinations_command::MockDestinationsCommand;
pub use destinations_command::DestinationsCommand;
#[cfg(test)]
pub use destinations_query::MockDestinationsQuery;
pub use destinations_query::DestinationsQuery;
#[cfg(test)]
pub use preference_repository::MockPreferenceRepository;
pub use preference_repository::{PreferenceRepository, PreferenceRepositoryError};
#[cfg(test)]
pub use preferences_command::MockPreferencesCommand;
pub use preferences_command::PreferencesCommand;
#[cfg(test)]
pub use preferences_query::MockPreferencesQuery;
pub use preferences_query::PreferencesQuery;
#[cfg(test)]
pub use store_maintenance::MockStoreMaintenance;
pub use store_maintenance::StoreMaintenance;
#[cfg(test)]
pub use store_reset_repository::MockStoreResetRepository;
pub use store_reset_repository::{StoreResetError, StoreResetRepository};
