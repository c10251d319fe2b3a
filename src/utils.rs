use rand::{Rng, distr::Alphanumeric};

/// Length of the one-time CSRF state token round-tripped through the
/// authorization redirect.
pub const STATE_TOKEN_LEN: usize = 32;

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Compares the callback `state` against the stored session value.
/// Both must be present, non-empty, and equal.
pub fn state_matches(received: Option<&str>, stored: Option<&str>) -> bool {
    match (received, stored) {
        (Some(received), Some(stored)) => !received.is_empty() && received == stored,
        _ => false,
    }
}
