//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request and response bodies they exchange. The document backs
//! Swagger UI in debug builds and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::destinations::{
    DestinationRequest, DestinationResponse, DestinationSummaryResponse,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::preferences::{
    PreferenceLabelResponse, PreferenceRequest, PreferenceResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel planner API",
        description = "In-memory destinations catalogue and per-user travel preferences."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::destinations::list_destinations,
        crate::inbound::http::destinations::get_destination,
        crate::inbound::http::destinations::create_destination,
        crate::inbound::http::preferences::create_preference,
        crate::inbound::http::preferences::list_preferences,
        crate::inbound::http::preferences::get_preference,
        crate::inbound::http::test_hooks::reset_all,
        crate::inbound::http::test_hooks::reset_preferences,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DestinationRequest,
        DestinationResponse,
        DestinationSummaryResponse,
        PreferenceRequest,
        PreferenceLabelResponse,
        PreferenceResponse,
        ErrorBody,
    )),
    tags(
        (name = "destinations", description = "Destination catalogue"),
        (name = "preferences", description = "Saved user preferences"),
        (name = "test-support", description = "Store resets for end-to-end suites"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
