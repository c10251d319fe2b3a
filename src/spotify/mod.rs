//! # Spotify Integration Module
//!
//! Thin client layer over the Spotify Web API endpoints this application
//! touches. Each submodule covers one domain and exposes free async
//! functions that take an access token and return typed payloads:
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow: authorize-URL
//!   construction, server-to-server code exchange (HTTP Basic with the
//!   client credentials), and the refresh grant.
//! - [`users`] - Profile of the authenticated user (`GET /me`).
//! - [`playlists`] - Playlist pages, track pages, unfollow, and batched
//!   track removal.
//!
//! ## Error mapping
//!
//! Every resource call maps an upstream 401 to [`ApiError::TokenExpired`]
//! and any other failure to [`ApiError::Upstream`]. No call is retried;
//! callers that tolerate partial failure collect errors into a report
//! instead (see [`crate::management::delete`]).
//!
//! [`ApiError::TokenExpired`]: crate::error::ApiError::TokenExpired
//! [`ApiError::Upstream`]: crate::error::ApiError::Upstream

pub mod auth;
pub mod playlists;
pub mod users;

use reqwest::Response;

use crate::error::ApiError;

/// Converts a non-success upstream response into the API error taxonomy.
/// 401 becomes `TokenExpired`; everything else is `Upstream`.
pub(crate) fn map_status_error(response: &Response) -> Option<ApiError> {
    let status = response.status();
    if status.is_success() {
        return None;
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        Some(ApiError::TokenExpired)
    } else {
        Some(ApiError::Upstream(format!("spotify returned {}", status)))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::UNAUTHORIZED) {
            ApiError::TokenExpired
        } else {
            ApiError::Upstream(err.to_string())
        }
    }
}
