//! HTTP layer: request parameters, the transport capability, and the
//! response envelope.

#[cfg(feature = "http")]
pub mod client;
pub mod envelope;
pub mod request;
pub mod transport;

#[cfg(feature = "http")]
pub use client::ReqwestTransport;
pub use envelope::parse_envelope;
pub use request::{Method, RequestParams};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
