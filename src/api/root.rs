use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::{
    error::AuthError,
    session::{STATE_KEY, TOKEN_KEY},
    spotify,
    types::Token,
    utils,
};

const APP_SHELL: &str = include_str!("../../assets/index.html");

/// Entry point of the application.
///
/// With a session-bound access token the app shell is served; otherwise a
/// fresh CSRF state token is stored in the session and the user agent is
/// redirected to the provider's consent screen.
pub async fn root(session: Session) -> Result<Response, AuthError> {
    let token = session.get::<Token>(TOKEN_KEY).await?;
    if token.is_some_and(|token| !token.access_token.is_empty()) {
        return Ok(Html(APP_SHELL).into_response());
    }

    let state = utils::generate_state_token();
    session.insert(STATE_KEY, &state).await?;

    Ok(Redirect::to(&spotify::auth::authorize_url(&state)?).into_response())
}
