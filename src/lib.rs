//! # Cryptsy SDK
//!
//! A Rust client for the Cryptsy authenticated trading API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Identifier newtypes, quantities, wire enums, timestamp parsing
//! 2. **Auth**: Credentials, nonce generation, HMAC-SHA512 request signing
//! 3. **HTTP**: Request parameters, the `Transport` capability, envelope parsing
//! 4. **Domain**: Vertical slices of typed entities and JSON → domain mapping
//! 5. **High-Level Client**: `CryptsyClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptsy::prelude::*;
//!
//! let client = CryptsyClient::builder()
//!     .credentials("public-key", "secret-key")
//!     .build()?;
//!
//! let markets = client.markets().list().await?;
//! let book = client.markets().order_book(&markets[0].market_id).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials, nonces and request signing.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Request building, transport and response envelope.
pub mod http;

// ── Layer 4: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, conversions, sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `CryptsyClient`: the primary entry point.
pub mod client;

pub use error::{Error, Result};

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        Address, ExchangeTimezone, MarketId, OrderId, OrderType, Quantity, TradeId,
        TransactionType,
    };

    // Domain types
    pub use crate::domain::account::{AccountInfo, Wallet};
    pub use crate::domain::market::{Market, MarketOrder, OrderBook};
    pub use crate::domain::order::{Fees, MyOrder};
    pub use crate::domain::trade::{MarketTrade, MyTrade};
    pub use crate::domain::transaction::Transaction;

    // Errors
    pub use crate::error::{DomainParseError, EnvelopeError, Error, TransportError};

    // Network
    pub use crate::network::DEFAULT_PRIVATE_URL;

    // Auth
    pub use crate::auth::{Clock, Credentials, NonceGenerator, SystemClock};

    // Transport
    pub use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{
        AccountClient, CryptsyClient, CryptsyClientBuilder, MarketsClient, OrdersClient,
        TradesClient,
    };
}
