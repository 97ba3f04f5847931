//! Remote service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the session cookie value.
pub const TOKEN_ENV_VAR: &str = "NCFA_TOKEN";

/// Prefixed form of [`TOKEN_ENV_VAR`]; the bare variable wins when both are set.
pub const PREFIXED_TOKEN_ENV_VAR: &str = "CLUBSTATS_API__NCFA_TOKEN";

fn default_base_url() -> String {
    "https://www.geoguessr.com/api".to_string()
}

fn default_user_agent() -> String {
    "GeoStatsClub/1.0".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Value of the `_ncfa` session cookie.
    #[serde(default)]
    pub ncfa_token: String,

    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            ncfa_token: String::new(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Check if a session credential is present.
    pub fn is_configured(&self) -> bool {
        !self.ncfa_token.trim().is_empty()
    }

    /// Pick the credential: `explicit` if given and non-blank, else the
    /// configured token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when neither is set, and
    /// [`ConfigError::InvalidValue`] when the chosen token cannot be carried
    /// in a cookie unchanged.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<String, ConfigError> {
        let token = explicit
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .or_else(|| Some(self.ncfa_token.trim()).filter(|token| !token.is_empty()))
            .ok_or(ConfigError::MissingCredential)?;

        if let Some(bad) = token.chars().find(|&c| !is_cookie_value_char(c)) {
            return Err(ConfigError::InvalidValue {
                field: "api.ncfa_token".into(),
                reason: format!("character {bad:?} is not allowed in a cookie value"),
            });
        }
        Ok(token.to_string())
    }

    /// Base URL without a trailing slash.
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// RFC 6265 `cookie-octet`: printable ASCII except space, `"`, `,`, `;`, `\\`.
const fn is_cookie_value_char(c: char) -> bool {
    matches!(c, '!' | '#'..='+' | '-'..=':' | '<'..='[' | ']'..='~')
}
