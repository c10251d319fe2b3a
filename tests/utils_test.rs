use chrono::Utc;

use spotsweep::types::{TOKEN_EXPIRY_BUFFER_SECS, Token, TokenResponse};
use spotsweep::utils::{STATE_TOKEN_LEN, generate_state_token, state_matches};

fn create_test_token(expires_in: u64, obtained_at: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "playlist-read-private".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_generate_state_token() {
    let state = generate_state_token();

    // Should be exactly STATE_TOKEN_LEN characters
    assert_eq!(state.len(), STATE_TOKEN_LEN);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let state2 = generate_state_token();
    assert_ne!(state, state2);
}

#[test]
fn test_state_matches_requires_both_sides() {
    assert!(state_matches(Some("abc"), Some("abc")));

    // A mismatch is rejected, as is any missing side. The token exchange is
    // unreachable on these paths.
    assert!(!state_matches(Some("abc"), Some("xyz")));
    assert!(!state_matches(None, Some("abc")));
    assert!(!state_matches(Some("abc"), None));
    assert!(!state_matches(None, None));
    assert!(!state_matches(Some(""), Some("")));
}

#[test]
fn test_token_expiry_honors_buffer() {
    let now = Utc::now().timestamp() as u64;

    // Fresh one-hour token is valid.
    let fresh = create_test_token(3600, now);
    assert!(!fresh.is_expired());

    // A token inside the refresh buffer already counts as expired.
    let nearly = create_test_token(TOKEN_EXPIRY_BUFFER_SECS - 10, now);
    assert!(nearly.is_expired());

    // A token past its nominal lifetime is expired.
    let stale = create_test_token(3600, now - 4000);
    assert!(stale.is_expired());
}

#[test]
fn test_token_from_response_stamps_obtained_at() {
    let before = Utc::now().timestamp() as u64;
    let token = Token::from_response(
        TokenResponse {
            access_token: "access".to_string(),
            refresh_token: Some("refresh".to_string()),
            scope: Some("scope".to_string()),
            expires_in: 3600,
        },
        None,
    );
    let after = Utc::now().timestamp() as u64;

    assert_eq!(token.access_token, "access");
    assert_eq!(token.refresh_token, "refresh");
    assert!(token.obtained_at >= before && token.obtained_at <= after);
}

#[test]
fn test_token_refresh_response_keeps_previous_refresh_token() {
    // The refresh grant may omit the refresh token; the previous one is
    // carried over.
    let token = Token::from_response(
        TokenResponse {
            access_token: "new-access".to_string(),
            refresh_token: None,
            scope: None,
            expires_in: 3600,
        },
        Some("old-refresh"),
    );

    assert_eq!(token.access_token, "new-access");
    assert_eq!(token.refresh_token, "old-refresh");
}
