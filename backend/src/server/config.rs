//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::config::{ServerSettings, SettingsError};

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) test_hooks: bool,
    pub(crate) cors_origin: Option<String>,
}

impl ServerConfig {
    /// Construct a configuration with test hooks enabled and any CORS origin.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            test_hooks: true,
            cors_origin: None,
        }
    }

    /// Build a configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the host or CORS origin is unusable.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            test_hooks: settings.test_hooks(),
            cors_origin: settings.cors_origin()?,
        })
    }

    /// Enable or disable the store reset endpoints.
    #[must_use]
    pub fn with_test_hooks(mut self, enabled: bool) -> Self {
        self.test_hooks = enabled;
        self
    }

    /// Restrict CORS to a single origin.
    #[must_use]
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_settings_carries_every_value() {
        let settings = ServerSettings {
            host: Some("127.0.0.1".to_owned()),
            port: Some(4000),
            test_hooks: Some(false),
            cors_origin: Some("https://planner.example/".to_owned()),
        };

        let config = ServerConfig::from_settings(&settings).expect("valid settings");

        assert_eq!(
            config,
            ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 4000)))
                .with_test_hooks(false)
                .with_cors_origin("https://planner.example")
        );
    }

    #[rstest]
    fn from_settings_rejects_bad_host() {
        let settings = ServerSettings {
            host: Some("not-an-ip".to_owned()),
            port: None,
            test_hooks: None,
            cors_origin: None,
        };
        assert!(matches!(
            ServerConfig::from_settings(&settings),
            Err(SettingsError::InvalidHost { .. })
        ));
    }

    #[rstest]
    fn unset_test_hooks_keep_reset_endpoints_mounted() {
        let settings = ServerSettings {
            host: None,
            port: None,
            test_hooks: None,
            cors_origin: None,
        };

        let config = ServerConfig::from_settings(&settings).expect("valid settings");

        assert!(config.test_hooks);
        assert_eq!(config, ServerConfig::new(SocketAddr::from(([0, 0, 0, 0], 3000))));
    }
}
