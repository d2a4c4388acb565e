//! HMAC-SHA512 request signing.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Sign the exact bytes that will be sent as the request body.
///
/// Returns the 128-character lowercase hex digest, no separators. Any change
/// to the body after signing invalidates the signature.
pub fn sign(body: &[u8], secret: &[u8]) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2.
    const RFC4231_CASE2: &str = concat!(
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554",
        "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
    );

    #[test]
    fn test_known_vector() {
        assert_eq!(
            sign(b"what do ya want for nothing?", b"Jefe"),
            RFC4231_CASE2
        );
    }

    #[test]
    fn test_deterministic() {
        let body = b"method=getinfo&nonce=1389810605000000";
        assert_eq!(sign(body, b"secret"), sign(body, b"secret"));
    }

    #[test]
    fn test_lowercase_hex_no_separators() {
        let sig = sign(b"method=getmarkets&nonce=1", b"k");
        assert_eq!(sig.len(), 128);
        assert!(sig.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_body_and_key_both_matter() {
        let base = sign(b"method=getinfo&nonce=1", b"k1");
        assert_ne!(base, sign(b"method=getinfo&nonce=2", b"k1"));
        assert_ne!(base, sign(b"method=getinfo&nonce=1", b"k2"));
    }
}
