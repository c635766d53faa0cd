//! Store reset endpoints used by end-to-end test suites.
//!
//! ```text
//! POST /test/reset
//! POST /preferences/reset
//! ```
//!
//! Registration is controlled by server configuration; when disabled the
//! paths fall through to the 404 fallback.

use actix_web::{HttpResponse, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Restore the seed destinations and clear every preference.
#[utoipa::path(
    post,
    path = "/test/reset",
    responses(
        (status = 200, description = "Store restored to seed state"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["test-support"],
    operation_id = "resetStore"
)]
#[post("/test/reset")]
pub async fn reset_all(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.maintenance.reset_all().await?;
    Ok(HttpResponse::Ok().finish())
}

/// Clear every preference and restart label numbering.
#[utoipa::path(
    post,
    path = "/preferences/reset",
    responses(
        (status = 200, description = "Preferences cleared"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["test-support"],
    operation_id = "resetPreferences"
)]
#[post("/preferences/reset")]
pub async fn reset_preferences(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.maintenance.reset_preferences().await?;
    Ok(HttpResponse::Ok().finish())
}
