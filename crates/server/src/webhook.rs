//! Webhook signature verification.
//!
//! The commerce platform signs every webhook body with HMAC-SHA256 using the
//! app's shared secret and sends the base64 digest in `X-Shopify-Hmac-Sha256`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the base64 HMAC of the body.
pub const SIGNATURE_HEADER: &str = "x-shopify-hmac-sha256";

/// Header carrying the unique delivery ID (stable across retries).
pub const WEBHOOK_ID_HEADER: &str = "x-shopify-webhook-id";

/// Signature verification failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The header is not valid base64.
    #[error("signature is not valid base64")]
    Malformed,
    /// The digest does not match the body.
    #[error("signature mismatch")]
    Mismatch,
    /// The secret could not be used as an HMAC key.
    #[error("invalid signing key")]
    InvalidKey,
}

/// Compute the base64 signature of a body.
///
/// # Errors
///
/// Returns `SignatureError::InvalidKey` if the secret is rejected as a key.
pub fn sign(secret: &SecretString, body: &[u8]) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Verify a provided signature against the body.
///
/// The digest comparison is constant-time.
///
/// # Errors
///
/// Returns `SignatureError` if the signature is malformed or does not match.
pub fn verify(secret: &SecretString, body: &[u8], provided: &str) -> Result<(), SignatureError> {
    let provided = STANDARD
        .decode(provided.trim())
        .map_err(|_| SignatureError::Malformed)?;

    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body);
    mac.verify_slice(&provided)
        .map_err(|_| SignatureError::Mismatch)
}
