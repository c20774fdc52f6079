use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verify an inbound-webhook signature: hex-encoded HMAC-SHA256 of the raw
/// request body, keyed with the shared webhook secret.
///
/// The comparison is constant-time so the check cannot be used as a
/// byte-at-a-time oracle. Any malformed hex fails verification.
pub fn verify_signature(secret: &str, payload: &[u8], signature_hex: &str) -> bool {
    let Ok(provided) = hex::decode(signature_hex.trim()) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);
    let expected = mac.finalize().into_bytes();

    if provided.len() != expected.len() {
        return false;
    }

    provided.ct_eq(&expected).into()
}

/// Compute the hex signature for a payload. Exposed so tests and local
/// tooling can mint valid webhook requests.
pub fn sign(secret: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
