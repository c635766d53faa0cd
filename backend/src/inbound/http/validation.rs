//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies deserialize into `Option<String>` fields so absent, `null`
//! and empty values can all be reported with the same client message.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{DestinationId, Error};

/// Message returned when any required body field is absent, null or empty.
pub const ALL_FIELDS_REQUIRED: &str = "All fields required";

/// Message returned when a destination id segment is not an integer.
pub const INVALID_ID_FORMAT: &str = "Invalid ID format";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error() -> Error {
    Error::missing_field(ALL_FIELDS_REQUIRED)
}

/// Unwrap every field or report all missing ones at once.
///
/// A field counts as missing when it is `None` or the empty string.
/// Whitespace-only values are accepted as submitted.
pub(crate) fn require_fields<const N: usize>(
    fields: [(FieldName, Option<String>); N],
) -> Result<[String; N], Error> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name.as_str())
        .collect();
    if !missing.is_empty() {
        warn!(fields = ?missing, "request rejected: required fields missing");
        return Err(missing_field_error());
    }
    Ok(fields.map(|(_, value)| value.unwrap_or_default()))
}

/// Map a draft validation failure onto the presence-check error.
pub(crate) fn rejected_draft(err: impl fmt::Display) -> Error {
    warn!(error = %err, "request rejected by draft validation");
    missing_field_error()
}

/// Parse a destination id path segment.
///
/// The segment's leading integer is used; trailing text is ignored.
pub(crate) fn parse_destination_id(raw: &str) -> Result<DestinationId, Error> {
    raw.parse().map_err(|_| {
        debug!(segment = raw, "destination id segment has no leading integer");
        Error::invalid_identifier(INVALID_ID_FORMAT)
    })
}
