use reqwest::Client;
use serde_json::{Value, json};

use crate::{config, error::ApiError, types::PlaylistPage};

/// Page size requested for the first playlist page. Follow-up pages use the
/// absolute `next` URL the provider returns, which carries its own paging
/// parameters.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

/// Page size for the single track page served per playlist.
pub const TRACK_PAGE_LIMIT: u32 = 100;

/// Retrieves one page of the current user's playlists.
///
/// With `page_url == None` the first page of `/me/playlists` is fetched;
/// otherwise `page_url` is the provider-supplied `next` URL and is used
/// verbatim.
pub async fn get_playlist_page(
    token: &str,
    page_url: Option<&str>,
) -> Result<PlaylistPage, ApiError> {
    let api_url = match page_url {
        Some(url) => url.to_string(),
        None => format!(
            "{uri}/me/playlists?limit={limit}",
            uri = &config::spotify_apiurl(),
            limit = PLAYLIST_PAGE_LIMIT
        ),
    };

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;
    if let Some(err) = super::map_status_error(&response) {
        return Err(err);
    }

    Ok(response.json::<PlaylistPage>().await?)
}

/// Retrieves the first page of a playlist's tracks as a raw payload.
///
/// The payload is passed through to the frontend untouched. Playlists
/// beyond [`TRACK_PAGE_LIMIT`] tracks are truncated to the first page;
/// deeper pagination is not implemented.
pub async fn get_tracks(token: &str, playlist_id: &str) -> Result<Value, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = TRACK_PAGE_LIMIT
    );

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;
    if let Some(err) = super::map_status_error(&response) {
        return Err(err);
    }

    Ok(response.json::<Value>().await?)
}

/// Removes the current user as a follower of a playlist.
///
/// This is the provider's notion of "deleting" a playlist from the user's
/// library; the playlist itself survives for other followers.
pub async fn unfollow(token: &str, playlist_id: &str) -> Result<(), ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/followers",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client.delete(&api_url).bearer_auth(token).send().await?;
    if let Some(err) = super::map_status_error(&response) {
        return Err(err);
    }

    Ok(())
}

/// Removes a batch of tracks from a playlist.
///
/// The caller is responsible for honoring the provider's per-call ceiling
/// of 100 URIs (see [`crate::management::delete`]).
pub async fn remove_tracks(
    token: &str,
    playlist_id: &str,
    uris: &[String],
) -> Result<(), ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = json!({
        "tracks": uris.iter().map(|uri| json!({ "uri": uri })).collect::<Vec<_>>(),
    });

    let client = Client::new();
    let response = client
        .delete(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    if let Some(err) = super::map_status_error(&response) {
        return Err(err);
    }

    Ok(())
}
