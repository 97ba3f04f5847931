//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// No session credential in the argument, config files, or environment.
    #[error(
        "Session credential missing: pass --token, set NCFA_TOKEN, or set api.ncfa_token in clubstats.toml"
    )]
    MissingCredential,

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
