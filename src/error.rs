//! Error taxonomy for the authorization flow and the JSON API.
//!
//! Two enums cover the two propagation paths: [`AuthError`] renders
//! user-facing HTML pages from the callback handler, [`ApiError`] renders
//! structured JSON from the `/api` endpoints. Nothing is retried
//! automatically; the bulk delete report is the only retry signal.

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures of the OAuth authorization flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider reported an error on the callback, i.e. the user denied
    /// the consent screen.
    #[error("authorization denied: {0}")]
    UserDenied(String),

    /// The `state` query parameter did not match the value stored in the
    /// session. The token exchange is never attempted in this case.
    #[error("state parameter mismatch")]
    CsrfMismatch,

    /// The server-to-server code exchange or the follow-up profile fetch
    /// failed.
    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// The session store could not be read or written.
    #[error("session error: {0}")]
    Session(String),

    /// The application is misconfigured, for example a malformed authorize
    /// endpoint URL.
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AuthError::UserDenied(_) => (
                // Original behavior: denial is a regular page, not an error.
                StatusCode::OK,
                "<html><body><h1>Authorization cancelled</h1>\
                 <p>Refresh the page to try again.</p><a href=\"/\">Back</a></body></html>"
                    .to_string(),
            ),
            AuthError::CsrfMismatch => (
                StatusCode::BAD_REQUEST,
                "<html><body><h1>Invalid request</h1></body></html>".to_string(),
            ),
            AuthError::TokenExchangeFailed(_) | AuthError::Session(_) | AuthError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "<html><body><h1>Authentication failed</h1>\
                 <p>Please try again later.</p><a href=\"/\">Back</a></body></html>"
                    .to_string(),
            ),
        };
        (status, Html(body)).into_response()
    }
}

/// Failures of the JSON API endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The session carries no access token.
    #[error("Not authenticated")]
    Unauthorized,

    /// The provider rejected the access token (HTTP 401 upstream).
    #[error("Token expired or invalid")]
    TokenExpired,

    /// Any other provider failure: network error, non-401 status,
    /// undecodable payload.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The session store could not be read or written.
    #[error("session error: {0}")]
    Session(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::TokenExpired => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<tower_sessions::session::Error> for ApiError {
    fn from(err: tower_sessions::session::Error) -> Self {
        ApiError::Session(err.to_string())
    }
}

impl From<tower_sessions::session::Error> for AuthError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AuthError::Session(err.to_string())
    }
}
