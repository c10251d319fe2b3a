use reqwest::Client;

use crate::{config, error::ApiError, types::UserProfile};

/// Fetches the profile of the user the access token belongs to.
///
/// Only the user id is needed downstream (editability checks, `/api/me`).
pub async fn get_profile(token: &str) -> Result<UserProfile, ApiError> {
    let client = Client::new();
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let response = client.get(&api_url).bearer_auth(token).send().await?;
    if let Some(err) = super::map_status_error(&response) {
        return Err(err);
    }

    Ok(response.json::<UserProfile>().await?)
}
