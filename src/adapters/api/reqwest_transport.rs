//! Reqwest Transport - Implementation of ApiTransport over HTTP.
//!
//! # Configuration
//!
//! ```ignore
//! let transport = ReqwestTransport::new(ApiConfig::new("http://localhost:8000"))?;
//! let proposals = transport.get(&Endpoint::Collection(EntityKind::Proposal)).await?;
//! ```
//!
//! Each request is a single attempt without a client-side timeout. Every
//! request carries a fresh `X-Request-Id` that also appears in the log lines
//! for that exchange.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::ports::{ApiFailure, ApiTransport, Endpoint, HttpMethod};

/// HTTP transport backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    config: ApiConfig,
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport for the configured base address.
    pub fn new(config: ApiConfig) -> Result<Self, ApiFailure> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiFailure::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the absolute URL for an endpoint.
    fn url(&self, endpoint: &Endpoint) -> String {
        self.config.url_for(&endpoint.path())
    }

    /// Sends the request and decodes the JSON body.
    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> Result<Value, ApiFailure> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, %method, path = %endpoint, "Sending API request");

        let response = request
            .header("Accept", "application/json")
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ApiFailure::transport(format!("Connection failed: {}", e))
                } else {
                    ApiFailure::transport(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiFailure::transport(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(ApiFailure::status(status.as_u16(), text));
        }

        tracing::debug!(%request_id, status = status.as_u16(), bytes = text.len(), "API response received");

        serde_json::from_str(&text)
            .map_err(|e| ApiFailure::parse(format!("Response is not valid JSON: {}", e)))
    }
}

#[async_trait]
impl ApiTransport for ReqwestTransport {
    async fn get(&self, endpoint: &Endpoint) -> Result<Value, ApiFailure> {
        let request = self.client.get(self.url(endpoint));
        self.send(HttpMethod::Get, endpoint, request).await
    }

    async fn post(&self, endpoint: &Endpoint, body: &Value) -> Result<Value, ApiFailure> {
        let request = self.client.post(self.url(endpoint)).json(body);
        self.send(HttpMethod::Post, endpoint, request).await
    }
}
