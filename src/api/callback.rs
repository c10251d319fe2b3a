use axum::{extract::Query, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AuthError,
    session::{STATE_KEY, TOKEN_KEY, USER_KEY},
    spotify, success, utils,
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Authorization completion endpoint.
///
/// Validates the round-tripped CSRF state before any token exchange, then
/// exchanges the code, stores token and user id in the session, and sends
/// the user back to `/`. Denials and failures render their pages through
/// [`AuthError`]'s response mapping.
pub async fn callback(
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AuthError> {
    complete_login(&session, params).await?;
    Ok(Redirect::to("/"))
}

async fn complete_login(session: &Session, params: CallbackParams) -> Result<(), AuthError> {
    // The state token is single-use: consume it on every path.
    let stored_state = session.remove::<String>(STATE_KEY).await?;

    if let Some(reason) = params.error {
        return Err(AuthError::UserDenied(reason));
    }

    if !utils::state_matches(params.state.as_deref(), stored_state.as_deref()) {
        return Err(AuthError::CsrfMismatch);
    }

    let code = params
        .code
        .ok_or_else(|| AuthError::TokenExchangeFailed("missing authorization code".to_string()))?;

    let token = spotify::auth::exchange_code(&code).await?;

    let profile = spotify::users::get_profile(&token.access_token)
        .await
        .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

    session.insert(TOKEN_KEY, &token).await?;
    session.insert(USER_KEY, &profile.id).await?;

    success!("User {} authenticated", profile.id);
    Ok(())
}
