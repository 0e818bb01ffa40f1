//! Configuration file management.
//!
//! Handles reading and validating `config.toml`:
//!
//! ```toml
//! [api]
//! url = "https://api.github.com"
//! timeout_secs = 30
//! user_agent = "ghkit/0.1.0"
//! ```
//!
//! The token is never read from this file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// REST API root, without trailing slash.
    pub url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_API_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            user_agent: constants::default_user_agent(),
        }
    }
}

impl Config {
    /// Default config location, `<config dir>/ghkit/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and defaults are used if nothing is there.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit file,
    /// `ConfigError::Parse` for malformed TOML, or a validation error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()).into());
                }
                p.to_path_buf()
            }
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or a validation error.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the API root, e.g. from `--api-url`.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self> {
        self.api.url = url.into();
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration.
    ///
    /// Checks:
    /// - API url is http(s)
    /// - Timeout is non-zero
    /// - User agent is not empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let url = self.api.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.url",
                reason: format!("expected an http(s) URL, got '{}'", self.api.url),
            }
            .into());
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.api.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.user_agent",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
