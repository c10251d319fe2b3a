use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

use crate::{api, error, info};

/// Assembles the router and serves it until the process ends.
///
/// Session cookies are HTTP-only, secure, SameSite=Lax (the callback
/// arrives as a cross-site top-level navigation), and live for the browser
/// session only.
pub async fn start_server(addr: &str) {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(true)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd);

    let app = Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .route("/api/playlists", get(api::playlists))
        .route("/api/playlists/{playlist_id}/tracks", get(api::tracks))
        .route("/api/me", get(api::me))
        .route("/api/delete-items", post(api::delete_items))
        .layer(session_layer);

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
