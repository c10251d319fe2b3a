//! OAuth 2.0 authorization-code flow against the Spotify accounts service.
//!
//! The web application is a confidential client: the code exchange and the
//! refresh grant authenticate with the client id/secret via HTTP Basic.
//! CSRF state generation and validation live with the session
//! ([`crate::utils`], [`crate::api::callback`]); this module only talks to
//! the provider.

use reqwest::{Client, Url};

use crate::{
    config,
    error::{ApiError, AuthError},
    types::{Token, TokenResponse},
};

/// Builds the provider consent URL the unauthenticated user is redirected
/// to.
///
/// Includes the configured scopes, the one-time CSRF `state` token, and
/// `show_dialog=true` so the consent screen is shown on every login.
/// A malformed `SPOTIFY_AUTH_URL` surfaces as [`AuthError::Config`];
/// startup additionally validates the URL so this is caught before the
/// first login.
pub fn authorize_url(state: &str) -> Result<String, AuthError> {
    let url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("response_type", "code"),
            ("client_id", &config::spotify_client_id()),
            ("scope", &config::spotify_scope()),
            ("redirect_uri", &config::spotify_redirect_uri()),
            ("state", state),
            ("show_dialog", "true"),
        ],
    )
    .map_err(|e| AuthError::Config(format!("invalid authorize URL: {e}")))?;

    Ok(url.to_string())
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Server-to-server call to the token endpoint using the
/// `authorization_code` grant, authenticated with the client credentials.
/// The redirect URI must match the one used in the authorize request.
pub async fn exchange_code(code: &str) -> Result<Token, AuthError> {
    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::spotify_redirect_uri()),
        ])
        .send()
        .await
        .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::TokenExchangeFailed(format!(
            "token endpoint returned {}",
            status
        )));
    }

    let payload: TokenResponse = response
        .json()
        .await
        .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

    Ok(Token::from_response(payload, None))
}

/// Exchanges a refresh token for a fresh access token.
///
/// The provider may rotate the refresh token or omit it from the response;
/// in the latter case the previous refresh token is kept.
pub async fn refresh_token(previous: &Token) -> Result<Token, ApiError> {
    let client = Client::new();
    let response = client
        .post(config::spotify_apitoken_url())
        .basic_auth(
            config::spotify_client_id(),
            Some(config::spotify_client_secret()),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", &previous.refresh_token),
        ])
        .send()
        .await?;

    if let Some(err) = super::map_status_error(&response) {
        return Err(err);
    }

    let payload: TokenResponse = response.json().await?;
    Ok(Token::from_response(
        payload,
        Some(previous.refresh_token.as_str()),
    ))
}
