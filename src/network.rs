//! Network URL constants for the Cryptsy SDK.

/// Default authenticated API endpoint (POST, signed form bodies).
pub const DEFAULT_PRIVATE_URL: &str = "https://www.cryptsy.com/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Request header carrying the HMAC-SHA512 signature of the body.
pub const HEADER_SIGN: &str = "Sign";

/// Request header carrying the public account key.
pub const HEADER_KEY: &str = "Key";
