//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DestinationsCommand, DestinationsQuery, PreferencesCommand, PreferencesQuery,
    StoreMaintenance,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub destinations: Arc<dyn DestinationsCommand>,
    pub destinations_query: Arc<dyn DestinationsQuery>,
    pub preferences: Arc<dyn PreferencesCommand>,
    pub preferences_query: Arc<dyn PreferencesQuery>,
    pub maintenance: Arc<dyn StoreMaintenance>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub destinations: Arc<dyn DestinationsCommand>,
    pub destinations_query: Arc<dyn DestinationsQuery>,
    pub preferences: Arc<dyn PreferencesCommand>,
    pub preferences_query: Arc<dyn PreferencesQuery>,
    pub maintenance: Arc<dyn StoreMaintenance>,
}

impl HttpState {
    /// Construct state from the bundled ports.
    #[must_use]
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            destinations,
            destinations_query,
            preferences,
            preferences_query,
            maintenance,
        } = ports;
        Self {
            destinations,
            destinations_query,
            preferences,
            preferences_query,
            maintenance,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
