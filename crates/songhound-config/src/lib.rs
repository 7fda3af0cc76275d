// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5150,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Emit log lines as JSON objects instead of human-readable text.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

/// Connection settings for the Genius API.
///
/// `endpoint` and `access_token` have no defaults; they must come from the
/// TOML file or from `SONGHOUND_GENIUS__ENDPOINT` / `SONGHOUND_GENIUS__ACCESS_TOKEN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeniusConfig {
    pub endpoint: Option<String>,
    pub access_token: Option<String>,
    /// Page size for searches without an override. Unset means the largest
    /// size the Genius client accepts.
    pub per_page: Option<u32>,
    /// Upper bound on page requests issued for a single search.
    pub max_pages: u32,
    pub timeout_secs: u64,
}

impl Default for GeniusConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            access_token: None,
            per_page: None,
            max_pages: 250,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub telemetry: TelemetryConfig,
    pub genius: GeniusConfig,
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: SONGHOUND_).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("SONGHOUND_").split("__"));

    let config: AppConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_leave_credentials_unset() {
        Jail::expect_with(|_jail| {
            let config = load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.http.port, 5150);
            assert_eq!(config.genius.per_page, None);
            assert_eq!(config.genius.max_pages, 250);
            assert!(config.genius.endpoint.is_none());
            assert!(config.genius.access_token.is_none());
            Ok(())
        });
    }

    #[test]
    fn toml_file_and_env_are_layered() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "songhound.toml",
                r#"
                [genius]
                endpoint = "https://api.genius.com"
                access_token = "from-file"
                max_pages = 10
                per_page = 20
                "#,
            )?;
            jail.set_env("SONGHOUND_GENIUS__ACCESS_TOKEN", "from-env");
            jail.set_env("SONGHOUND_HTTP__PORT", "8080");

            let config = load(Some(Path::new("songhound.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(
                config.genius.endpoint.as_deref(),
                Some("https://api.genius.com")
            );
            assert_eq!(config.genius.access_token.as_deref(), Some("from-env"));
            assert_eq!(config.genius.max_pages, 10);
            assert_eq!(config.genius.per_page, Some(20));
            assert_eq!(config.http.port, 8080);
            Ok(())
        });
    }
}
