//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryTravelStore;
use crate::server::in_memory_ports;

/// Ports wired to a fresh seeded store, so each test owns its state.
pub(crate) fn seeded_ports() -> HttpStatePorts {
    in_memory_ports(Arc::new(InMemoryTravelStore::seeded()))
}

/// Handler state wrapped for `App::app_data`.
pub(crate) fn seeded_state() -> web::Data<HttpState> {
    web::Data::new(HttpState::from(seeded_ports()))
}
