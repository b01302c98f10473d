// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration
//!
//! Credentials and tunables are read from the environment exactly once at
//! startup and injected into the pipelines as immutable values; business
//! logic never touches the environment. A pipeline whose credentials are
//! missing is simply not constructed, and every request to it answers 500.

use std::env;

/// Default per-call timeout for upstream requests, in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Credentials and endpoint settings for the Amazon PA-API pipeline.
#[derive(Debug, Clone)]
pub struct PaapiConfig {
    pub access_key: String,
    pub secret_key: String,
    pub partner_tag: String,
    pub region: String,
    pub host: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl PaapiConfig {
    /// Load from `PAAPI_*` environment variables.
    ///
    /// Returns `None` when any of the three required credentials is absent;
    /// region and host have production defaults.
    pub fn from_env() -> Option<Self> {
        let access_key = env::var("PAAPI_ACCESS_KEY").ok()?;
        let secret_key = env::var("PAAPI_SECRET_KEY").ok()?;
        let partner_tag = env::var("PAAPI_PARTNER_TAG").ok()?;

        Some(Self {
            access_key,
            secret_key,
            partner_tag,
            region: env::var("PAAPI_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            host: env::var("PAAPI_HOST").unwrap_or_else(|_| "webservices.amazon.co.jp".to_string()),
            timeout_secs: upstream_timeout_secs(),
        })
    }
}

/// Credentials for the Rakuten Books pipeline.
#[derive(Debug, Clone)]
pub struct RakutenConfig {
    pub application_id: String,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl RakutenConfig {
    /// Load from `RAKUTEN_APPLICATION_ID`; `None` when unset.
    pub fn from_env() -> Option<Self> {
        let application_id = env::var("RAKUTEN_APPLICATION_ID").ok()?;
        Some(Self {
            application_id,
            timeout_secs: upstream_timeout_secs(),
        })
    }
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}

/// Everything the node reads from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paapi: Option<PaapiConfig>,
    pub rakuten: Option<RakutenConfig>,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            paapi: PaapiConfig::from_env(),
            rakuten: RakutenConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}

fn upstream_timeout_secs() -> u64 {
    env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; keep each one self-contained and
    // use distinct variable values so ordering does not matter.

    #[test]
    fn test_server_config_default_port() {
        env::remove_var("API_PORT");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_paapi_config_requires_all_credentials() {
        env::remove_var("PAAPI_ACCESS_KEY");
        env::remove_var("PAAPI_SECRET_KEY");
        env::remove_var("PAAPI_PARTNER_TAG");
        assert!(PaapiConfig::from_env().is_none());
    }

    #[test]
    fn test_rakuten_config_missing() {
        env::remove_var("RAKUTEN_APPLICATION_ID");
        assert!(RakutenConfig::from_env().is_none());
    }
}
