use std::future::Future;

use crate::{
    error::ApiError,
    spotify,
    types::{DeleteFailure, DeleteReport, DeleteRequest},
    warning,
};

/// The provider accepts at most 100 track URIs per removal call.
pub const TRACK_CHUNK_SIZE: usize = 100;

/// Remote operations the bulk delete fans out over. Seam for exercising the
/// orchestration without a network.
pub trait PlaylistRemover {
    fn unfollow_playlist(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn remove_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Live remover backed by the Spotify Web API.
pub struct SpotifyRemover<'a> {
    pub token: &'a str,
}

impl PlaylistRemover for SpotifyRemover<'_> {
    async fn unfollow_playlist(&self, playlist_id: &str) -> Result<(), ApiError> {
        spotify::playlists::unfollow(self.token, playlist_id).await
    }

    async fn remove_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError> {
        spotify::playlists::remove_tracks(self.token, playlist_id, uris).await
    }
}

/// Runs a bulk delete request to completion.
///
/// Every sub-operation is independent: each playlist in the unfollow set
/// gets one call, and each track list is split into chunks of
/// [`TRACK_CHUNK_SIZE`] URIs (original order preserved) with one sequential
/// removal call per chunk. A failing call is recorded in the report and the
/// remaining calls still proceed; nothing is retried. The upstream API has
/// no transaction over these endpoints, so the contract is best-effort with
/// an itemized failure list.
pub async fn execute<R: PlaylistRemover>(remover: &R, request: &DeleteRequest) -> DeleteReport {
    let mut report = DeleteReport::default();

    for playlist_id in &request.playlists {
        if let Err(err) = remover.unfollow_playlist(playlist_id).await {
            warning!("Unfollow of playlist {} failed: {}", playlist_id, err);
            report.record(DeleteFailure::Playlist {
                id: playlist_id.clone(),
                error: err.to_string(),
            });
        }
    }

    for (playlist_id, uris) in &request.tracks {
        for chunk in uris.chunks(TRACK_CHUNK_SIZE) {
            if let Err(err) = remover.remove_tracks(playlist_id, chunk).await {
                warning!(
                    "Track removal from playlist {} failed ({} URIs): {}",
                    playlist_id,
                    chunk.len(),
                    err
                );
                report.record(DeleteFailure::Tracks {
                    playlist_id: playlist_id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    report
}
