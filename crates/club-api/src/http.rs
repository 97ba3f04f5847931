//! Shared response helpers.
//!
//! Only `200 OK` counts as success; the service answers private or unknown
//! users with other 2xx/4xx codes that must not be mistaken for data.

use crate::error::ApiError;

/// Return the response unchanged if it is `200 OK`, else [`ApiError::Status`].
pub fn check_status(path: &str, resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == reqwest::StatusCode::OK {
        return Ok(resp);
    }
    Err(ApiError::Status {
        path: path.to_string(),
        status: resp.status().as_u16(),
    })
}
