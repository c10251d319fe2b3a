//! Session-bound token lifecycle and the access guard.
//!
//! The browser session (cookie-backed, server-side store) is the only state
//! this application holds: the one-time CSRF state token during login, then
//! the token set and the authenticated user id. [`AuthSession`] is the
//! extractor form of the access guard: resource handlers that take it are
//! unreachable without a session-bound access token.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::{error::ApiError, spotify, types::Token, warning};

/// Session key of the one-time CSRF state token (present only between the
/// authorize redirect and the callback).
pub const STATE_KEY: &str = "oauth_state";
/// Session key of the access/refresh token set.
pub const TOKEN_KEY: &str = "token";
/// Session key of the authenticated user's Spotify id.
pub const USER_KEY: &str = "user_id";

/// Per-request authenticated context handed to resource handlers.
pub struct AuthSession {
    pub session: Session,
    pub token: Token,
    pub user_id: String,
}

impl AuthSession {
    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::Session(msg.to_string()))?;

        let Some(mut token) = session.get::<Token>(TOKEN_KEY).await? else {
            return Err(ApiError::Unauthorized);
        };
        if token.access_token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        // Best-effort refresh. If it fails the stale token is kept and the
        // provider's 401 surfaces through the normal error mapping.
        if token.is_expired() {
            match spotify::auth::refresh_token(&token).await {
                Ok(fresh) => {
                    session.insert(TOKEN_KEY, &fresh).await?;
                    token = fresh;
                }
                Err(err) => warning!("Token refresh failed: {}", err),
            }
        }

        let user_id = session.get::<String>(USER_KEY).await?.unwrap_or_default();

        Ok(AuthSession {
            session,
            token,
            user_id,
        })
    }
}
