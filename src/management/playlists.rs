use std::future::Future;

use crate::{
    error::ApiError,
    spotify,
    types::{PlaylistPage, PlaylistView, SpotifyPlaylist},
};

/// Source of playlist pages. `page_url == None` requests the first page;
/// afterwards the provider-supplied `next` URL is passed back in until it
/// comes up empty.
pub trait PlaylistSource {
    fn fetch_page(
        &self,
        page_url: Option<&str>,
    ) -> impl Future<Output = Result<PlaylistPage, ApiError>> + Send;
}

/// Live source backed by the Spotify Web API.
pub struct SpotifySource<'a> {
    pub token: &'a str,
}

impl PlaylistSource for SpotifySource<'_> {
    async fn fetch_page(&self, page_url: Option<&str>) -> Result<PlaylistPage, ApiError> {
        spotify::playlists::get_playlist_page(self.token, page_url).await
    }
}

/// A playlist is editable iff the current user owns it or it is
/// collaborative.
pub fn is_editable(playlist: &SpotifyPlaylist, current_user_id: &str) -> bool {
    playlist.owner.id == current_user_id || playlist.collaborative
}

fn to_view(playlist: SpotifyPlaylist, current_user_id: &str) -> PlaylistView {
    let editable = is_editable(&playlist, current_user_id);
    PlaylistView {
        image_url: playlist
            .images
            .and_then(|images| images.into_iter().next())
            .map(|image| image.url),
        is_editable: editable,
        owner_id: playlist.owner.id,
        id: playlist.id,
        name: playlist.name,
    }
}

/// Fetches every page of the user's playlists and flattens them, in page
/// order, into annotated views.
///
/// A failure on any page aborts the collection; there is no partial
/// playlist listing.
pub async fn collect_playlists<S: PlaylistSource>(
    source: &S,
    current_user_id: &str,
) -> Result<Vec<PlaylistView>, ApiError> {
    let mut views = Vec::new();
    let mut page_url: Option<String> = None;

    loop {
        let page = source.fetch_page(page_url.as_deref()).await?;
        views.extend(
            page.items
                .into_iter()
                .map(|playlist| to_view(playlist, current_user_id)),
        );

        match page.next {
            Some(next) => page_url = Some(next),
            None => break,
        }
    }

    Ok(views)
}
