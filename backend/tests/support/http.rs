//! Shared HTTP helpers for the travel planner behavioural suite.

use actix_web::http::Method;
use awc::Client;
use serde_json::Value;
use travel_planner::domain::TRACE_ID_HEADER;

use crate::harness::{SharedWorld, with_world_async};

pub(crate) struct JsonRequest<'a> {
    pub(crate) method: Method,
    pub(crate) path: &'a str,
    pub(crate) payload: Option<Value>,
}

impl<'a> JsonRequest<'a> {
    pub(crate) fn get(path: &'a str) -> Self {
        Self {
            method: Method::GET,
            path,
            payload: None,
        }
    }

    pub(crate) fn post(path: &'a str, payload: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            path,
            payload,
        }
    }
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    body: Option<Value>,
}

fn record_response(world: &SharedWorld, captured: CapturedResponse) {
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_body = captured.body;
}

/// Encode the characters generated labels contain so they survive the URI.
pub(crate) fn encode_segment(raw: &str) -> String {
    raw.replace(' ', "%20")
}

pub(crate) fn perform_json_request(world: &SharedWorld, spec: JsonRequest<'_>) {
    let captured = with_world_async(world, |base_url| async move {
        let request = Client::default().request(spec.method, format!("{base_url}{}", spec.path));
        let mut response = match spec.payload {
            Some(payload) => request.send_json(&payload).await.expect("json request"),
            None => request.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.body().await.expect("body");
        // Reset hooks answer with an empty body.
        let json = (!body.is_empty())
            .then(|| serde_json::from_slice::<Value>(&body).expect("json body"));
        CapturedResponse {
            status,
            trace_id,
            body: json,
        }
    });

    record_response(world, captured);
}
