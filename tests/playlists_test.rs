use serde_json::json;

use spotsweep::error::ApiError;
use spotsweep::management::playlists::{PlaylistSource, collect_playlists, is_editable};
use spotsweep::types::{Image, PlaylistOwner, PlaylistPage, PlaylistView, SpotifyPlaylist};

// Helper function to create a test playlist
fn create_test_playlist(id: &str, owner_id: &str, collaborative: bool) -> SpotifyPlaylist {
    SpotifyPlaylist {
        id: id.to_string(),
        name: format!("Playlist {id}"),
        images: Some(vec![Image {
            url: format!("https://img.test/{id}.jpg"),
        }]),
        owner: PlaylistOwner {
            id: owner_id.to_string(),
        },
        collaborative,
    }
}

/// Fake source serving a fixed sequence of pages linked via `next` URLs.
struct PagedSource {
    pages: Vec<PlaylistPage>,
}

impl PagedSource {
    fn new(pages: Vec<Vec<SpotifyPlaylist>>) -> Self {
        let last = pages.len().saturating_sub(1);
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, items)| PlaylistPage {
                items,
                next: (i < last).then(|| format!("https://api.test/page/{}", i + 1)),
            })
            .collect();
        PagedSource { pages }
    }
}

impl PlaylistSource for PagedSource {
    async fn fetch_page(&self, page_url: Option<&str>) -> Result<PlaylistPage, ApiError> {
        let index = match page_url {
            None => 0,
            Some(url) => url
                .rsplit('/')
                .next()
                .and_then(|segment| segment.parse::<usize>().ok())
                .ok_or_else(|| ApiError::Upstream(format!("bad page url {url}")))?,
        };
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| ApiError::Upstream(format!("no page {index}")))
    }
}

#[tokio::test]
async fn test_pagination_concatenates_all_pages_in_order() {
    let source = PagedSource::new(vec![
        vec![
            create_test_playlist("a", "me", false),
            create_test_playlist("b", "me", false),
        ],
        vec![
            create_test_playlist("c", "me", false),
            create_test_playlist("d", "me", false),
        ],
        vec![create_test_playlist("e", "me", false)],
    ]);

    let views = collect_playlists(&source, "me").await.unwrap();

    let ids: Vec<&str> = views.iter().map(|view| view.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

    // No duplicates across page boundaries.
    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_single_page_listing() {
    let source = PagedSource::new(vec![vec![create_test_playlist("only", "me", false)]]);

    let views = collect_playlists(&source, "me").await.unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, "only");
    assert_eq!(views[0].image_url.as_deref(), Some("https://img.test/only.jpg"));
}

#[tokio::test]
async fn test_page_failure_aborts_collection() {
    // Page 1 links to a page that does not exist.
    let mut source = PagedSource::new(vec![vec![create_test_playlist("a", "me", false)]]);
    source.pages[0].next = Some("https://api.test/page/9".to_string());

    let result = collect_playlists(&source, "me").await;
    assert!(matches!(result, Err(ApiError::Upstream(_))));
}

#[tokio::test]
async fn test_editability_annotation() {
    let source = PagedSource::new(vec![vec![
        create_test_playlist("own", "me", false),
        create_test_playlist("own-collab", "me", true),
        create_test_playlist("foreign", "someone", false),
        create_test_playlist("foreign-collab", "someone", true),
    ]]);

    let views = collect_playlists(&source, "me").await.unwrap();
    let editable: Vec<bool> = views.iter().map(|view| view.is_editable).collect();

    // Owner match wins regardless of the collaborative flag; otherwise the
    // flag decides.
    assert_eq!(editable, vec![true, true, false, true]);
    assert_eq!(views[2].owner_id, "someone");
}

#[test]
fn test_is_editable_matrix() {
    let own = create_test_playlist("p", "me", false);
    assert!(is_editable(&own, "me"));

    let own_collab = create_test_playlist("p", "me", true);
    assert!(is_editable(&own_collab, "me"));

    let foreign = create_test_playlist("p", "someone", false);
    assert!(!is_editable(&foreign, "me"));

    let foreign_collab = create_test_playlist("p", "someone", true);
    assert!(is_editable(&foreign_collab, "me"));
}

#[tokio::test]
async fn test_missing_images_map_to_null_url() {
    let mut playlist = create_test_playlist("p", "me", false);
    playlist.images = None;
    let source = PagedSource::new(vec![vec![playlist]]);

    let views = collect_playlists(&source, "me").await.unwrap();
    assert_eq!(views[0].image_url, None);
}

#[test]
fn test_playlist_view_serializes_camel_case() {
    let view = PlaylistView {
        id: "p".to_string(),
        name: "My Mix".to_string(),
        image_url: Some("https://img.test/p.jpg".to_string()),
        is_editable: true,
        owner_id: "me".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "id": "p",
            "name": "My Mix",
            "imageUrl": "https://img.test/p.jpg",
            "isEditable": true,
            "ownerId": "me"
        })
    );
}

#[test]
fn test_provider_page_parsing_tolerates_missing_fields() {
    // `images` and `collaborative` are not always present in provider
    // payloads.
    let page: PlaylistPage = serde_json::from_value(json!({
        "items": [{
            "id": "p",
            "name": "Mix",
            "owner": { "id": "someone" }
        }],
        "next": null
    }))
    .unwrap();

    assert_eq!(page.items.len(), 1);
    assert!(!page.items[0].collaborative);
    assert!(page.items[0].images.is_none());
    assert!(page.next.is_none());
}
