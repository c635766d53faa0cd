//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional configuration file,
//! `TRAVEL_PLANNER_*` environment variables and command-line flags.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;
/// Reset endpoints are mounted unless explicitly disabled.
pub const DEFAULT_TEST_HOOKS: bool = true;

/// Errors raised when settings hold unusable values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The host is not an IP address.
    #[error("invalid host `{value}`: expected an IP address")]
    InvalidHost { value: String },
    /// The CORS origin is not an absolute http(s) origin.
    #[error("invalid CORS origin `{value}`: {reason}")]
    InvalidCorsOrigin { value: String, reason: String },
}

/// Configuration values controlling the HTTP listener.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAVEL_PLANNER")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Register the store reset endpoints.
    pub test_hooks: Option<bool>,
    /// Single origin allowed by CORS; any origin when unset.
    pub cors_origin: Option<String>,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether the store reset endpoints are mounted; on unless disabled.
    pub fn test_hooks(&self) -> bool {
        self.test_hooks.unwrap_or(DEFAULT_TEST_HOOKS)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            value: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Normalise the configured CORS origin, if any.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidCorsOrigin`] when the value is not an
    /// absolute `http` or `https` URL.
    pub fn cors_origin(&self) -> Result<Option<String>, SettingsError> {
        self.cors_origin.as_deref().map(normalise_origin).transpose()
    }
}

fn normalise_origin(raw: &str) -> Result<String, SettingsError> {
    let invalid = |reason: &str| SettingsError::InvalidCorsOrigin {
        value: raw.to_owned(),
        reason: reason.to_owned(),
    };
    let url = Url::parse(raw).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host().is_none() {
        return Err(invalid("origin must include a host"));
    }
    Ok(url.origin().ascii_serialization())
}
