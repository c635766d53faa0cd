//! HTTP inbound adapter exposing REST endpoints.

pub mod destinations;
pub mod error;
pub mod fallback;
pub mod health;
pub mod json_config;
pub mod preferences;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod test_hooks;
pub mod validation;

pub use error::ApiResult;
