//! Session Token Signing
//!
//! Signed session tokens of the form `{session_id}.{signature}` where
//! the signature is HMAC-SHA256 over the session ID, base64url-encoded
//! without padding. A single sign/verify pair is used everywhere a
//! token is produced or consumed.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Sign a session ID into a cookie token
pub fn sign(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token and extract the session ID
///
/// Returns None for any malformed, tampered, or wrongly-signed token.
/// Signature comparison is constant-time via `Mac::verify_slice`.
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (id_part, sig_part) = token.split_once('.')?;

    let session_id = Uuid::parse_str(id_part).ok()?;
    let signature = URL_SAFE_NO_PAD.decode(sig_part).ok()?;

    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(id_part.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(session_id)
}
