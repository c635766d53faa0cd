//! JSON extractor configuration.
//!
//! Replaces Actix's plain-text deserialisation errors with the standard
//! `{"error": ...}` body so clients see one error shape. A body sent without
//! a JSON content type is treated as carrying no fields at all.

use actix_web::error::JsonPayloadError;
use actix_web::web;
use tracing::warn;

use crate::domain::Error;
use crate::inbound::http::validation::missing_field_error;

/// Message returned when a request body is not a JSON object of the
/// expected shape.
pub const INVALID_JSON_PAYLOAD: &str = "Invalid JSON payload";

/// Build the [`web::JsonConfig`] registered on the application.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "request body rejected");
        match err {
            JsonPayloadError::ContentType => missing_field_error().into(),
            _ => Error::invalid_payload(INVALID_JSON_PAYLOAD).into(),
        }
    })
}
