//! # club-config
//!
//! Layered configuration loading for clubstats using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `NCFA_TOKEN` (session credential only)
//! 2. Environment variables (`CLUBSTATS_*` prefix, `__` as separator)
//! 3. Project-level `./clubstats.toml`
//! 4. User-level `~/.config/clubstats/config.toml`
//! 5. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CLUBSTATS_API__BASE_URL` -> `api.base_url`,
//! `CLUBSTATS_EXPORT__THROTTLE_MS` -> `export.throttle_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use club_config::ClubConfig;
//!
//! // Load `.env` first, then all other sources:
//! let config = ClubConfig::load_with_dotenv().expect("config");
//!
//! if !config.api.is_configured() {
//!     eprintln!("no session credential configured");
//! }
//! ```

mod api;
mod error;
mod export;

pub use api::{ApiConfig, PREFIXED_TOKEN_ENV_VAR, TOKEN_ENV_VAR};
pub use error::ConfigError;
pub use export::ExportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "clubstats.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl ClubConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`ClubConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then [`ClubConfig::load`].
    ///
    /// A missing `.env` file is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`ClubConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Like [`ClubConfig::load_with_dotenv`] but without [`ClubConfig::validate`],
    /// for callers that layer overrides before validating.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn extract_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::extract()
    }

    fn extract() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer more providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Prefixed environment variables
        figment = figment.merge(Env::prefixed("CLUBSTATS_").split("__"));

        // Layer 4: Credential variables, read verbatim. `Env` would parse a
        // token like `123` or `true` into a number or bool.
        for var in [PREFIXED_TOKEN_ENV_VAR, TOKEN_ENV_VAR] {
            if let Ok(token) = std::env::var(var) {
                figment = figment.merge(Serialized::default("api.ncfa_token", token));
            }
        }

        figment
    }

    /// Reject values that would only fail later, mid-run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.export.output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.output".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("clubstats").join("config.toml"))
    }
}
