//! Authentication: credentials, nonce generation, request signing.
//!
//! ## Security Model
//!
//! - The secret key lives only inside [`Credentials`], in zeroize-on-drop
//!   memory. It has no public accessor and is redacted from `Debug` output.
//! - Every private request carries two headers: `Key` (the public account key)
//!   and `Sign` (HMAC-SHA512 of the exact form body, lowercase hex).
//! - Each private request draws a fresh nonce from a [`NonceGenerator`]; the
//!   exchange rejects any nonce not greater than the last one it accepted.

pub mod nonce;
pub mod signer;

pub use nonce::{Clock, NonceGenerator, SystemClock};
pub use signer::sign;

use zeroize::Zeroizing;

/// API key pair for one exchange account.
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    secret: Zeroizing<Vec<u8>>,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret: impl AsRef<[u8]>) -> Self {
        Self {
            public_key: public_key.into(),
            secret: Zeroizing::new(secret.as_ref().to_vec()),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign a finalized request body with this account's secret.
    pub fn sign(&self, body: &[u8]) -> String {
        sign(body, &self.secret)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("pub-key", "very-secret");
        let dbg = format!("{creds:?}");
        assert!(dbg.contains("pub-key"));
        assert!(!dbg.contains("very-secret"));
    }

    #[test]
    fn test_credentials_sign_matches_free_function() {
        let creds = Credentials::new("pub", "Jefe");
        let body = b"what do ya want for nothing?";
        assert_eq!(creds.sign(body), sign(body, b"Jefe"));
    }
}
