//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
///
/// Each variant is a distinct failure class a caller can branch on: the
/// request never completed, the response was not a valid envelope, the
/// exchange reported a failure, or the payload held a bad field.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Domain parse error: {0}")]
    DomainParse(#[from] DomainParseError),

    #[error("Operation not supported: {operation}")]
    NotSupported { operation: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures before a usable response body is available.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Other(String),
}

/// Failures while reading the `success` / `error` / `return` envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Body is not JSON, or is JSON but not an object.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Body is a JSON object without a `success` field.
    #[error("Response has no success field")]
    MissingSuccessField,

    /// The exchange reported `success != "1"`.
    #[error("Exchange reported failure{}", message_suffix(.message))]
    ApplicationFailure { message: Option<String> },
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// A single field inside an otherwise well-formed payload failed to map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{record}.{field}: {kind}")]
pub struct DomainParseError {
    /// Which record was being mapped, e.g. `markettrades[3]`.
    pub record: String,
    /// Wire name of the offending field.
    pub field: String,
    pub kind: DomainParseErrorKind,
}

impl DomainParseError {
    pub fn new(
        record: impl Into<String>,
        field: impl Into<String>,
        kind: DomainParseErrorKind,
    ) -> Self {
        Self {
            record: record.into(),
            field: field.into(),
            kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainParseErrorKind {
    #[error("missing")]
    Missing,

    #[error("invalid quantity {0:?}")]
    InvalidQuantity(String),

    #[error("unknown value {0:?}")]
    UnknownVariant(String),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("invalid identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("expected {0}")]
    UnexpectedType(&'static str),
}
