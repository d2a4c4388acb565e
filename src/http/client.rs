//! `reqwest`-backed [`Transport`].

use crate::error::TransportError;
use crate::http::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Pooled HTTP client. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut req = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if !request.body.is_empty() {
            req = req.body(request.body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();

        tracing::trace!(status, bytes = body.len(), "Response received");

        Ok(HttpResponse { status, body })
    }
}
