//! Bearer token persisted in `localStorage`.
//!
//! The token is only decoded for display and routing decisions; the server
//! verifies its signature on every request.

use crate::model::user::TokenClaims;

pub const TOKEN_STORAGE_KEY: &str = "jwt_token";

#[cfg(feature = "web")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "web")]
pub fn load() -> Option<String> {
    storage()?
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

#[cfg(not(feature = "web"))]
pub fn load() -> Option<String> {
    None
}

#[cfg(feature = "web")]
pub fn save(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

#[cfg(not(feature = "web"))]
pub fn save(_token: &str) {}

#[cfg(feature = "web")]
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[cfg(not(feature = "web"))]
pub fn clear() {}

/// Converts a base64url JWT segment to padded standard base64 for `atob`.
fn to_standard_base64(segment: &str) -> String {
    let mut encoded: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while encoded.len() % 4 != 0 {
        encoded.push('=');
    }
    encoded
}

#[cfg(feature = "web")]
fn base64_decode(encoded: &str) -> Option<String> {
    web_sys::window()?.atob(encoded).ok()
}

#[cfg(not(feature = "web"))]
fn base64_decode(_encoded: &str) -> Option<String> {
    None
}

/// Claims from the token payload, or None when the token is malformed.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return None,
    };

    let json = base64_decode(&to_standard_base64(payload))?;
    serde_json::from_str(&json).ok()
}

/// An undecodable token counts as expired.
pub fn is_expired(claims: Option<&TokenClaims>, now: i64) -> bool {
    claims.map_or(true, |c| c.is_expired(now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_url_safe_alphabet_and_pads() {
        assert_eq!(to_standard_base64("ab-_"), "ab+/");
        assert_eq!(to_standard_base64("abcde"), "abcde===");
        assert_eq!(to_standard_base64("abcdef"), "abcdef==");
    }

    #[test]
    fn missing_claims_are_expired() {
        let claims = TokenClaims {
            user_id: 1,
            username: "alice".to_string(),
            role: "user".to_string(),
            exp: 1_000,
            iat: 0,
        };

        assert!(is_expired(None, 0));
        assert!(!is_expired(Some(&claims), 999));
        assert!(is_expired(Some(&claims), 1_000));
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert_eq!(decode_claims("not-a-token"), None);
        assert_eq!(decode_claims("a.b"), None);
    }
}
