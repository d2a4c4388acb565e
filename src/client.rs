//! High-level client: `CryptsyClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared request pipeline, and the
//! accessor methods.

use crate::auth::{Clock, Credentials, NonceGenerator, SystemClock};
use crate::domain::account::client::Account;
use crate::domain::market::client::Markets;
use crate::domain::order::client::Orders;
use crate::domain::trade::client::Trades;
use crate::error::{EnvelopeError, Error, Result, TransportError};
use crate::http::request::PARAM_NONCE;
use crate::http::{parse_envelope, HttpMethod, HttpRequest, RequestParams, Transport};
use crate::network::{DEFAULT_PRIVATE_URL, DEFAULT_TIMEOUT_SECS, HEADER_KEY, HEADER_SIGN};
use crate::shared::{ExchangeTimezone, MarketId, OrderId, OrderType, Quantity};

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::trade::client::Trades as TradesClient;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The primary entry point for the Cryptsy SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.orders()`, etc. Clones share the transport,
/// credentials and nonce sequence.
#[derive(Clone)]
pub struct CryptsyClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: Arc<Credentials>,
    pub(crate) nonces: Arc<NonceGenerator<Arc<dyn Clock>>>,
    pub(crate) private_url: String,
    pub(crate) timezone: ExchangeTimezone,
}

impl CryptsyClient {
    pub fn builder() -> CryptsyClientBuilder {
        CryptsyClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn private_url(&self) -> &str {
        &self.private_url
    }

    pub fn exchange_timezone(&self) -> ExchangeTimezone {
        self.timezone
    }

    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    // ── Request pipeline ─────────────────────────────────────────────────

    pub(crate) fn params(
        &self,
        method: crate::http::Method,
        market_id: Option<&MarketId>,
        order_id: Option<&OrderId>,
        limit: Option<u32>,
    ) -> RequestParams {
        RequestParams::build(method, self.nonces.next(), market_id, order_id, limit)
    }

    pub(crate) fn order_params(
        &self,
        method: crate::http::Method,
        market_id: Option<&MarketId>,
        order_type: OrderType,
        quantity: Quantity,
        price: Quantity,
    ) -> RequestParams {
        RequestParams::build_order(
            method,
            self.nonces.next(),
            market_id,
            order_type,
            quantity,
            price,
        )
    }

    /// Sign, send and unwrap one private call. Returns the `return` payload.
    pub(crate) async fn call(&self, params: RequestParams) -> Result<Value> {
        let method = params.method();
        let body = params.encode().into_bytes();
        let signature = self.credentials.sign(&body);

        tracing::debug!(
            method = %method,
            nonce = params.get(PARAM_NONCE).unwrap_or_default(),
            "Sending private request"
        );

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.private_url.clone(),
            headers: vec![
                ("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()),
                (HEADER_SIGN.to_string(), signature),
                (HEADER_KEY.to_string(), self.credentials.public_key().to_string()),
            ],
            body,
        };

        let response = self.transport.send(request).await?;

        // The envelope decides the outcome whenever the body carries one,
        // whatever the HTTP status.
        match parse_envelope(&response.body) {
            Err(EnvelopeError::MalformedResponse(_) | EnvelopeError::MissingSuccessField)
                if !response.is_success() =>
            {
                tracing::warn!(
                    method = %method,
                    status = response.status,
                    "Non-success HTTP status"
                );
                Err(TransportError::Status {
                    status: response.status,
                    body: String::from_utf8_lossy(&response.body).into_owned(),
                }
                .into())
            }
            Ok(payload) => Ok(payload),
            Err(EnvelopeError::ApplicationFailure { message }) => {
                tracing::warn!(
                    method = %method,
                    error = message.as_deref().unwrap_or("<none>"),
                    "Exchange reported failure"
                );
                Err(EnvelopeError::ApplicationFailure { message }.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn not_supported<T>(operation: &'static str) -> Result<T> {
        tracing::debug!(operation, "Operation not supported");
        Err(Error::NotSupported { operation })
    }
}

impl std::fmt::Debug for CryptsyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptsyClient")
            .field("private_url", &self.private_url)
            .field("credentials", &self.credentials)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptsyClientBuilder {
    private_url: String,
    timeout: Duration,
    credentials: Option<Credentials>,
    timezone: ExchangeTimezone,
    transport: Option<Arc<dyn Transport>>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for CryptsyClientBuilder {
    fn default() -> Self {
        Self {
            private_url: DEFAULT_PRIVATE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credentials: None,
            timezone: ExchangeTimezone::uncorrected(),
            transport: None,
            clock: None,
        }
    }
}

impl CryptsyClientBuilder {
    pub fn private_url(mut self, url: &str) -> Self {
        self.private_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Request timeout for the default transport. Ignored when a transport
    /// is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn credentials(mut self, public_key: impl Into<String>, secret: impl AsRef<[u8]>) -> Self {
        self.credentials = Some(Credentials::new(public_key, secret));
        self
    }

    pub fn exchange_timezone(mut self, timezone: ExchangeTimezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Send requests through a custom transport instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Time source for nonces.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<CryptsyClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::Config("credentials are required".to_string()))?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.timeout)?,
        };

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);

        Ok(CryptsyClient {
            transport,
            credentials: Arc::new(credentials),
            nonces: Arc::new(NonceGenerator::new(clock)),
            private_url: self.private_url,
            timezone: self.timezone,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>> {
    let transport = crate::http::ReqwestTransport::new(timeout)
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>> {
    Err(Error::Config(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_timeout() {
        let builder = CryptsyClientBuilder::default();
        assert_eq!(builder.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let builder = builder.timeout(Duration::from_secs(5));
        assert_eq!(builder.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_build_requires_credentials() {
        let err = CryptsyClient::builder().build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_builder_defaults() {
        let client = CryptsyClient::builder()
            .credentials("pub", "secret")
            .build()
            .unwrap();
        assert_eq!(client.private_url(), DEFAULT_PRIVATE_URL);
        assert_eq!(client.exchange_timezone(), ExchangeTimezone::uncorrected());
        assert_eq!(client.public_key(), "pub");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_private_url_trailing_slash_trimmed() {
        let client = CryptsyClient::builder()
            .private_url("https://example.test/api/")
            .credentials("pub", "secret")
            .build()
            .unwrap();
        assert_eq!(client.private_url(), "https://example.test/api");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_debug_does_not_leak_secret() {
        let client = CryptsyClient::builder()
            .credentials("pub", "hunter2")
            .build()
            .unwrap();
        assert!(!format!("{client:?}").contains("hunter2"));
    }
}
