//! Destination HTTP handlers.
//!
//! ```text
//! GET  /destinations
//! GET  /destinations/{id}
//! POST /destinations
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Destination, DestinationDraft, DestinationSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_destination_id, rejected_draft, require_fields,
};

/// Request payload for creating a destination.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRequest {
    #[schema(example = "Tokyo")]
    pub name: Option<String>,
    #[schema(example = "temperate")]
    pub climate: Option<String>,
    #[schema(example = "high")]
    pub budget: Option<String>,
    #[schema(example = "March-May")]
    pub best_time: Option<String>,
}

fn parse_destination_request(payload: DestinationRequest) -> ApiResult<DestinationDraft> {
    let [name, climate, budget, best_time] = require_fields([
        (FieldName::new("name"), payload.name),
        (FieldName::new("climate"), payload.climate),
        (FieldName::new("budget"), payload.budget),
        (FieldName::new("bestTime"), payload.best_time),
    ])?;
    DestinationDraft::new(name, climate, budget, best_time).map_err(rejected_draft)
}

/// Full destination record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Marrakesh")]
    pub name: String,
    #[schema(example = "arid")]
    pub climate: String,
    #[schema(example = "medium")]
    pub budget: String,
    #[schema(example = "Spring/Fall")]
    pub best_time: String,
}

impl From<Destination> for DestinationResponse {
    fn from(value: Destination) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            climate: value.climate,
            budget: value.budget,
            best_time: value.best_time,
        }
    }
}

/// List projection of a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DestinationSummaryResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Marrakesh")]
    pub name: String,
}

impl From<DestinationSummary> for DestinationSummaryResponse {
    fn from(value: DestinationSummary) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
        }
    }
}

/// List every destination as `{id, name}` in storage order.
#[utoipa::path(
    get,
    path = "/destinations",
    responses(
        (status = 200, description = "Destination list", body = [DestinationSummaryResponse]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["destinations"],
    operation_id = "listDestinations"
)]
#[get("/destinations")]
pub async fn list_destinations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<DestinationSummaryResponse>>> {
    let summaries = state.destinations_query.list_destinations().await?;
    Ok(web::Json(
        summaries
            .into_iter()
            .map(DestinationSummaryResponse::from)
            .collect(),
    ))
}

/// Fetch one destination by numeric id.
///
/// Only the leading integer of the segment is read, so `1.5` fetches id 1.
#[utoipa::path(
    get,
    path = "/destinations/{id}",
    params(("id" = String, Path, description = "Destination id; trailing non-digits are ignored")),
    responses(
        (status = 200, description = "Destination", body = DestinationResponse),
        (status = 400, description = "Id has no leading integer", body = ErrorBody),
        (status = 404, description = "Destination not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["destinations"],
    operation_id = "getDestination"
)]
#[get("/destinations/{id}")]
pub async fn get_destination(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DestinationResponse>> {
    let id = parse_destination_id(&path.into_inner())?;
    let destination = state.destinations_query.fetch_destination(id).await?;
    Ok(web::Json(DestinationResponse::from(destination)))
}

/// Create a destination; the id is assigned by the store.
#[utoipa::path(
    post,
    path = "/destinations",
    request_body = DestinationRequest,
    responses(
        (status = 201, description = "Destination created", body = DestinationResponse),
        (status = 400, description = "Missing field or malformed body", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["destinations"],
    operation_id = "createDestination"
)]
#[post("/destinations")]
pub async fn create_destination(
    state: web::Data<HttpState>,
    payload: web::Json<DestinationRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_destination_request(payload.into_inner())?;
    let created = state.destinations.create_destination(draft).await?;
    Ok(HttpResponse::Created().json(DestinationResponse::from(created)))
}
