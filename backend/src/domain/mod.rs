//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed travel-planner entities and the use-case
//! services that operate on them. Inbound adapters depend on the driving
//! ports in [`ports`]; outbound adapters implement the driven ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - Destination, DestinationDraft, DestinationId: catalogue records.
//! - Preference, PreferenceDraft, PreferenceLabel, UserId: saved preferences.
//! - TraceId: per-request correlation identifier.

pub mod destination;
pub mod destination_service;
pub mod error;
pub mod maintenance_service;
pub mod ports;
pub mod preference;
pub mod preference_service;
pub mod seed;
pub mod trace_id;

pub use self::destination::{
    Destination, DestinationDraft, DestinationId, DestinationIdParseError, DestinationSummary,
    DestinationValidationError,
};
pub use self::destination_service::{DESTINATION_NOT_FOUND, DestinationService};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::maintenance_service::StoreMaintenanceService;
pub use self::preference::{
    PREFERENCE_LABEL_PREFIX, Preference, PreferenceDraft, PreferenceLabel, PreferenceSummary,
    PreferenceValidationError, UserId,
};
pub use self::preference_service::{PREFERENCE_NOT_FOUND, PreferenceService};
pub use self::seed::seed_destinations;
pub use self::trace_id::TraceId;
