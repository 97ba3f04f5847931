//! # club-api
//!
//! Authenticated HTTP client for the GeoGuessr web API.
//!
//! Requests carry the `_ncfa` session cookie and fixed identifying headers.
//! Two endpoint policies apply:
//! - profile and club member list are mandatory: any non-200 is an
//!   [`ApiError`]
//! - per-user stats and peak rating are best-effort: any failure is logged
//!   and returned as `None`

mod error;
mod http;

pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use club_config::{ApiConfig, ConfigError};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::http::check_status;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "_ncfa";

/// Client bound to one base URL and one session credential.
#[derive(Debug, Clone)]
pub struct ClubClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClubClient {
    /// Build a client from `config`, using `token` when given and the
    /// configured credential otherwise.
    ///
    /// No request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if no credential is available or the base
    /// URL does not parse, and [`ApiError::Http`] if the HTTP client fails
    /// to build.
    pub fn new(config: &ApiConfig, token: Option<&str>) -> Result<Self, ApiError> {
        let token = config.resolve_token(token)?;
        let base_url = config.base_url_trimmed().to_string();
        let url = reqwest::Url::parse(&base_url).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url".into(),
            reason: e.to_string(),
        })?;

        let jar = reqwest::cookie::Jar::default();
        jar.add_cookie_str(&format!("{SESSION_COOKIE}={token}; Path=/"), &url);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .cookie_provider(Arc::new(jar))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are issued against, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");
        let resp = check_status(path, self.http.get(&url).send().await?)?;
        Ok(resp.json().await?)
    }

    /// Best-effort GET: every failure becomes `None`.
    async fn get_optional(&self, path: &str) -> Option<Value> {
        match self.get_json(path).await {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(path, %error, "optional fetch failed; continuing without it");
                None
            }
        }
    }

    /// Profile of the authenticated user (`/v3/profiles`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-200 status, or an
    /// undecodable body.
    pub async fn get_profile(&self) -> Result<Value, ApiError> {
        self.get_json("/v3/profiles").await
    }

    /// Membership entries of `club_id` (`/v4/clubs/{id}/members`), in
    /// service order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-200 status, or a body
    /// that is not a JSON array.
    pub async fn get_club_members(&self, club_id: &str) -> Result<Vec<Value>, ApiError> {
        let path = format!("/v4/clubs/{}/members", urlencoding::encode(club_id));
        match self.get_json(&path).await? {
            Value::Array(entries) => Ok(entries),
            other => Err(ApiError::Parse {
                path,
                reason: format!("expected a JSON array, got {}", json_kind(&other)),
            }),
        }
    }

    /// Statistics for `user_id` (`/v4/stats/users/{id}`), or `None` when the
    /// service does not return them.
    pub async fn get_user_stats(&self, user_id: &str) -> Option<Value> {
        self.get_user_section("/v4/stats/users", user_id).await
    }

    /// Peak ranked rating for `user_id`
    /// (`/v4/ranked-system/peak-rating/{id}`), or `None` when unavailable.
    pub async fn get_user_peak_rating(&self, user_id: &str) -> Option<Value> {
        self.get_user_section("/v4/ranked-system/peak-rating", user_id)
            .await
    }

    async fn get_user_section(&self, base: &str, user_id: &str) -> Option<Value> {
        if user_id.is_empty() {
            tracing::debug!(endpoint = base, "skipping per-user fetch for member without userId");
            return None;
        }
        let path = format!("{base}/{}", urlencoding::encode(user_id));
        self.get_optional(&path).await
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
