//! Builders wiring domain services over the in-memory store into HTTP state.

use std::sync::Arc;

use actix_web::web;

use crate::domain::{DestinationService, PreferenceService, StoreMaintenanceService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryTravelStore;

/// Build every driving port over one shared store.
#[must_use]
pub fn in_memory_ports(store: Arc<InMemoryTravelStore>) -> HttpStatePorts {
    let destinations = Arc::new(DestinationService::new(Arc::clone(&store)));
    let preferences = Arc::new(PreferenceService::new(Arc::clone(&store)));
    let maintenance = Arc::new(StoreMaintenanceService::new(store));
    HttpStatePorts {
        destinations: destinations.clone(),
        destinations_query: destinations,
        preferences: preferences.clone(),
        preferences_query: preferences,
        maintenance,
    }
}

/// Build handler state over the given store.
#[must_use]
pub fn build_http_state(store: Arc<InMemoryTravelStore>) -> web::Data<HttpState> {
    web::Data::new(HttpState::from(in_memory_ports(store)))
}
