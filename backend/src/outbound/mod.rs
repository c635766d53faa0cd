//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store for destinations and preferences.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business logic.

pub mod memory;
