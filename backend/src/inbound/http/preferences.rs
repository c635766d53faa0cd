//! Preference HTTP handlers.
//!
//! ```text
//! POST /preferences
//! GET  /preferences/{userId}
//! GET  /preferences/{userId}/{label}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PreferenceDraft, PreferenceLabel, PreferenceSummary, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, rejected_draft, require_fields};

/// Request payload for saving a preference.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    #[schema(example = "user1")]
    pub user_id: Option<String>,
    #[schema(example = "tropical")]
    pub climate: Option<String>,
    #[schema(example = "medium")]
    pub budget: Option<String>,
}

fn parse_preference_request(payload: PreferenceRequest) -> ApiResult<PreferenceDraft> {
    let [user_id, climate, budget] = require_fields([
        (FieldName::new("userId"), payload.user_id),
        (FieldName::new("climate"), payload.climate),
        (FieldName::new("budget"), payload.budget),
    ])?;
    PreferenceDraft::new(user_id, climate, budget).map_err(rejected_draft)
}

/// Label generated for a newly saved preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceLabelResponse {
    #[schema(example = "Preference 1")]
    pub label: String,
}

/// Client-facing preference record; the owner is implied by the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceResponse {
    #[schema(example = "Preference 1")]
    pub label: String,
    #[schema(example = "tropical")]
    pub climate: String,
    #[schema(example = "medium")]
    pub budget: String,
}

impl From<PreferenceSummary> for PreferenceResponse {
    fn from(value: PreferenceSummary) -> Self {
        Self {
            label: value.label.into(),
            climate: value.climate,
            budget: value.budget,
        }
    }
}

/// Save a preference and return its generated label.
#[utoipa::path(
    post,
    path = "/preferences",
    request_body = PreferenceRequest,
    responses(
        (status = 201, description = "Preference saved", body = PreferenceLabelResponse),
        (status = 400, description = "Missing field or malformed body", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["preferences"],
    operation_id = "createPreference"
)]
#[post("/preferences")]
pub async fn create_preference(
    state: web::Data<HttpState>,
    payload: web::Json<PreferenceRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_preference_request(payload.into_inner())?;
    let label = state.preferences.create_preference(draft).await?;
    Ok(HttpResponse::Created().json(PreferenceLabelResponse {
        label: label.into(),
    }))
}

/// List a user's preferences in insertion order.
#[utoipa::path(
    get,
    path = "/preferences/{userId}",
    params(("userId" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Preferences owned by the user", body = [PreferenceResponse]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["preferences"],
    operation_id = "listPreferences"
)]
#[get("/preferences/{user_id}")]
pub async fn list_preferences(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<PreferenceResponse>>> {
    let user_id = UserId::new(path.into_inner());
    let summaries = state.preferences_query.list_preferences(&user_id).await?;
    Ok(web::Json(
        summaries.into_iter().map(PreferenceResponse::from).collect(),
    ))
}

/// Fetch one of a user's preferences by label.
///
/// A label owned by someone else is reported exactly like an unknown label.
#[utoipa::path(
    get,
    path = "/preferences/{userId}/{label}",
    params(
        ("userId" = String, Path, description = "Owner identifier"),
        ("label" = String, Path, description = "Generated label, e.g. `Preference 1`")
    ),
    responses(
        (status = 200, description = "Preference", body = PreferenceResponse),
        (status = 404, description = "Preference not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["preferences"],
    operation_id = "getPreference"
)]
#[get("/preferences/{user_id}/{label}")]
pub async fn get_preference(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<PreferenceResponse>> {
    let (user_id, label) = path.into_inner();
    let summary = state
        .preferences_query
        .fetch_preference(&UserId::new(user_id), &PreferenceLabel::new(label))
        .await?;
    Ok(web::Json(PreferenceResponse::from(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::inbound::http::json_config::json_config;
    use crate::inbound::http::test_utils::seeded_state;
    use actix_web::http::StatusCode;
    use actix_web::App;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    macro_rules! preferences_app {
        () => {
            actix_test::init_service(
                App::new()
                    .app_data(seeded_state())
                    .app_data(json_config())
                    .service(create_preference)
                    .service(list_preferences)
                    .service(get_preference),
            )
            .await
        };
    }

    macro_rules! save {
        ($app:expr, $payload:expr) => {
            actix_test::call_service(
                $app,
                actix_test::TestRequest::post()
                    .uri("/preferences")
                    .set_json(&$payload)
                    .to_request(),
            )
            .await
        };
    }

    #[rstest]
    #[actix_web::test]
    async fn create_returns_sequential_labels() {
        let app = preferences_app!();

        for expected in ["Preference 1", "Preference 2"] {
            let res = save!(
                &app,
                json!({"userId": "user1", "climate": "tropical", "budget": "medium"})
            );
            assert_eq!(res.status(), StatusCode::CREATED);
            let body: PreferenceLabelResponse = actix_test::read_body_json(res).await;
            assert_eq!(body.label, expected);
        }
    }

    #[rstest]
    #[case(json!({"userId": "", "climate": "tropical", "budget": "medium"}))]
    #[case(json!({"userId": "user1", "budget": "medium"}))]
    #[case(json!({"userId": "user1", "climate": "tropical", "budget": null}))]
    #[actix_web::test]
    async fn create_requires_every_field(#[case] payload: Value) {
        let app = preferences_app!();

        let res = save!(&app, payload);

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = actix_test::read_body_json(res).await;
        assert_eq!(body.error, "All fields required");
    }

    #[rstest]
    #[actix_web::test]
    async fn list_filters_by_owner_in_order() {
        let app = preferences_app!();
        for (user, climate) in [("user1", "tropical"), ("user2", "arid"), ("user1", "alpine")] {
            save!(&app, json!({"userId": user, "climate": climate, "budget": "medium"}));
        }

        let req = actix_test::TestRequest::get().uri("/preferences/user1").to_request();
        let body: Vec<PreferenceResponse> = actix_test::call_and_read_body_json(&app, req).await;

        let labels: Vec<_> = body.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Preference 1", "Preference 3"]);

        let req = actix_test::TestRequest::get().uri("/preferences/nobody").to_request();
        let empty: Vec<PreferenceResponse> = actix_test::call_and_read_body_json(&app, req).await;
        assert!(empty.is_empty());
    }

    #[rstest]
    #[case("/preferences/user1/Preference%201", StatusCode::OK)]
    #[case("/preferences/user2/Preference%201", StatusCode::NOT_FOUND)]
    #[case("/preferences/user1/nonexistent", StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn detail_enforces_ownership(#[case] uri: &str, #[case] status: StatusCode) {
        let app = preferences_app!();
        save!(
            &app,
            json!({"userId": "user1", "climate": "tropical", "budget": "medium"})
        );

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;

        assert_eq!(res.status(), status);
        if status == StatusCode::OK {
            let body: PreferenceResponse = actix_test::read_body_json(res).await;
            assert_eq!(
                body,
                PreferenceResponse {
                    label: "Preference 1".to_owned(),
                    climate: "tropical".to_owned(),
                    budget: "medium".to_owned(),
                }
            );
        } else {
            let body: ErrorBody = actix_test::read_body_json(res).await;
            assert_eq!(body.error, "Preference not found");
        }
    }

    #[rstest]
    fn parse_request_rejects_default_payload() {
        let err = parse_preference_request(PreferenceRequest::default()).expect_err("empty");
        assert_eq!(err.code(), ErrorCode::MissingField);
    }
}
