//! Configuration management for the playlist sweeper.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. Spotify client credentials are
//! required and the accessors panic with a clear message when they are
//! missing; everything else (bind address, Spotify endpoint URLs, redirect
//! URI) carries a sensible default so a local setup only needs the two
//! credential variables.

use std::env;

/// Default OAuth scopes requested during authorization.
///
/// Read access for private and collaborative playlists plus modify access
/// for both public and private playlists, which the delete endpoints need.
pub const DEFAULT_SCOPE: &str = "playlist-read-private playlist-read-collaborative playlist-modify-public playlist-modify-private";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are not an error; in that case configuration comes from the
/// process environment alone.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Used for the HTTP Basic authentication of the server-to-server token
/// exchange. Keep it out of logs and version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered with the Spotify application.
///
/// Reads `SPOTIFY_REDIRECT_URI`, defaulting to the local callback endpoint
/// derived from the default server address.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").unwrap_or_else(|_| "http://localhost:3000/callback".to_string())
}

/// Returns the OAuth scope string requested during authorization.
///
/// Reads `SPOTIFY_SCOPE`, defaulting to [`DEFAULT_SCOPE`].
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads `SPOTIFY_AUTH_URL`, defaulting to the public accounts endpoint.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_TOKEN_URL`, defaulting to the public accounts endpoint.
/// Used both for the authorization-code exchange and the refresh grant.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}
