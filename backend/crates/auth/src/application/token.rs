//! Session Token Signing and Verification
//!
//! The client-visible token is `{session_id}.{base64url(hmac_sha256)}`.
//! Only the opaque token crosses the wire; the session row itself stays
//! server-side.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

/// Generate a signed session token for a session ID
pub fn sign_session_token(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        session_id,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Parse and verify a session token, returning the session ID
///
/// Any malformed or tampered token maps to `SessionInvalid`; callers never
/// learn which part failed.
pub fn verify_session_token(secret: &[u8; 32], token: &str) -> AuthResult<Uuid> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(AuthError::SessionInvalid);
    }

    let session_id_str = parts[0];
    let signature_b64 = parts[1];

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::SessionInvalid)?;

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_roundtrip() {
        let secret = [7u8; 32];
        let session_id = Uuid::new_v4();

        let token = sign_session_token(&secret, session_id);
        let parsed = verify_session_token(&secret, &token).unwrap();

        assert_eq!(parsed, session_id);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let secret = [7u8; 32];
        let session_id = Uuid::new_v4();

        let token = sign_session_token(&secret, session_id);
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('A');

        assert!(verify_session_token(&secret, &tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let session_id = Uuid::new_v4();
        let token = sign_session_token(&[7u8; 32], session_id);

        assert!(verify_session_token(&[8u8; 32], &token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let secret = [7u8; 32];
        assert!(verify_session_token(&secret, "").is_err());
        assert!(verify_session_token(&secret, "no-dot").is_err());
        assert!(verify_session_token(&secret, "a.b.c").is_err());
        assert!(verify_session_token(&secret, "not-a-uuid.c2ln").is_err());
    }
}
