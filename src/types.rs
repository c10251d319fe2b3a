use std::fmt;

use chrono::Utc;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};

/// Seconds before the nominal expiry at which a token already counts as
/// expired, leaving room for in-flight requests.
pub const TOKEN_EXPIRY_BUFFER_SECS: u64 = 240;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Builds a session token from a provider token response, stamping the
    /// current time. A refresh response may omit the refresh token, in which
    /// case the previous one is carried over.
    pub fn from_response(resp: TokenResponse, previous_refresh: Option<&str>) -> Self {
        Token {
            access_token: resp.access_token,
            refresh_token: resp
                .refresh_token
                .or_else(|| previous_refresh.map(str::to_string))
                .unwrap_or_default(),
            scope: resp.scope.unwrap_or_default(),
            expires_in: resp.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in.saturating_sub(TOKEN_EXPIRY_BUFFER_SECS)
    }
}

/// Payload of the provider's token endpoint for both the
/// authorization-code and the refresh grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<SpotifyPlaylist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyPlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    pub owner: PlaylistOwner,
    #[serde(default)]
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

/// Per-request playlist projection served by `/api/playlists`.
///
/// `is_editable` holds iff the playlist is owned by the current user or is
/// collaborative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistView {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub is_editable: bool,
    pub owner_id: String,
}

/// Body of `POST /api/delete-items`: playlists to unfollow and, per
/// playlist, track URIs to remove. The tracks field arrives as a JSON
/// object but is kept as ordered pairs so removal calls go out in client
/// submission order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub playlists: Vec<String>,
    #[serde(
        default,
        serialize_with = "serialize_track_map",
        deserialize_with = "deserialize_track_map"
    )]
    pub tracks: Vec<(String, Vec<String>)>,
}

impl DeleteRequest {
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty() && self.tracks.iter().all(|(_, uris)| uris.is_empty())
    }
}

fn serialize_track_map<S>(entries: &[(String, Vec<String>)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(entries.iter().map(|(id, uris)| (id, uris)))
}

fn deserialize_track_map<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<String>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TrackMapVisitor;

    impl<'de> Visitor<'de> for TrackMapVisitor {
        type Value = Vec<(String, Vec<String>)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of playlist ids to track URI lists")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(TrackMapVisitor)
}

/// One recorded sub-operation failure of a bulk delete run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeleteFailure {
    Playlist {
        id: String,
        error: String,
    },
    #[serde(rename_all = "camelCase")]
    Tracks {
        playlist_id: String,
        error: String,
    },
}

/// Aggregate outcome of a bulk delete run. An empty error list means full
/// success; anything else is partial success with itemized failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteReport {
    pub errors: Vec<DeleteFailure>,
}

impl DeleteReport {
    pub fn record(&mut self, failure: DeleteFailure) {
        self.errors.push(failure);
    }

    pub fn is_full_success(&self) -> bool {
        self.errors.is_empty()
    }
}
