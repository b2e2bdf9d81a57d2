//! Editor session identifier generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const SESSION_ID_BYTES: usize = 18;

/// Generates a cryptographically secure random editor session id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 24-character id that is safe to put in a
/// cookie value.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_session_id() -> String {
    let mut buffer = [0u8; SESSION_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `id` has the shape of a generated session id.
///
/// Cookie values that fail this check are ignored instead of being used as
/// map keys.
pub fn is_valid_session_id(id: &str) -> bool {
    id.len() == 24
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
