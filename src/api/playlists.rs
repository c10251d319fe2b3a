use axum::{extract::Path, response::Json};
use serde_json::Value;

use crate::{
    error::ApiError,
    management::playlists::{SpotifySource, collect_playlists},
    session::AuthSession,
    spotify,
    types::PlaylistView,
};

/// Lists every playlist of the authenticated user, all pages flattened in
/// provider order, each annotated with its editability flag.
pub async fn playlists(auth: AuthSession) -> Result<Json<Vec<PlaylistView>>, ApiError> {
    let source = SpotifySource {
        token: auth.access_token(),
    };
    let views = collect_playlists(&source, &auth.user_id).await?;
    Ok(Json(views))
}

/// Serves the first track page of a playlist as a raw passthrough payload.
/// Playlists beyond the 100-track page cap are truncated here.
pub async fn tracks(
    auth: AuthSession,
    Path(playlist_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let page = spotify::playlists::get_tracks(auth.access_token(), &playlist_id).await?;
    Ok(Json(page))
}
