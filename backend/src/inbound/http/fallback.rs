//! Catch-all handler for requests that match no route.

use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Message returned for unknown paths and unsupported methods.
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Default service registered on the application.
pub async fn endpoint_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(Error::not_found(ENDPOINT_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::error::ErrorBody;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use rstest::rstest;

    #[rstest]
    #[case(test::TestRequest::get().uri("/unknown"))]
    #[case(test::TestRequest::delete().uri("/destinations/1"))]
    #[actix_web::test]
    async fn unmatched_requests_get_json_404(#[case] req: test::TestRequest) {
        let app =
            test::init_service(App::new().default_service(web::to(endpoint_not_found))).await;

        let res = test::call_service(&app, req.to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(res).await;
        assert_eq!(body.error, ENDPOINT_NOT_FOUND);
    }
}
