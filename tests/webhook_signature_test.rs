///! Tests for inbound-webhook HMAC signature verification.
///!
///! Signatures are computed over the raw request body with a shared secret,
///! so the tests mint signatures locally. No running server is needed.
///!
///! Run with: `cargo test --test webhook_signature_test`
use limelight_backend::email::signature::{sign, verify_signature};

const TEST_SECRET: &str = "webhook-test-secret-do-not-use-in-production";

#[test]
fn valid_signature_verifies() {
    let payload = br#"{"from":"fan@example.com","subject":"Ticket question","text":"Hi!"}"#;
    let signature = sign(TEST_SECRET, payload);

    assert!(verify_signature(TEST_SECRET, payload, &signature));
}

#[test]
fn signature_with_surrounding_whitespace_verifies() {
    // Some webhook senders pad the header value.
    let payload = b"hello";
    let signature = format!("  {}\n", sign(TEST_SECRET, payload));

    assert!(verify_signature(TEST_SECRET, payload, &signature));
}

#[test]
fn wrong_secret_is_rejected() {
    let payload = b"hello";
    let signature = sign("some-other-secret", payload);

    assert!(!verify_signature(TEST_SECRET, payload, &signature));
}

#[test]
fn tampered_payload_is_rejected() {
    let signature = sign(TEST_SECRET, b"original body");

    assert!(!verify_signature(TEST_SECRET, b"altered body", &signature));
}

#[test]
fn malformed_hex_is_rejected() {
    assert!(!verify_signature(TEST_SECRET, b"hello", "not-hex-at-all"));
    assert!(!verify_signature(TEST_SECRET, b"hello", ""));
}

#[test]
fn truncated_signature_is_rejected() {
    let signature = sign(TEST_SECRET, b"hello");
    let truncated = &signature[..signature.len() - 2];

    assert!(!verify_signature(TEST_SECRET, b"hello", truncated));
}
