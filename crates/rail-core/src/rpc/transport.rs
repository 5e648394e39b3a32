//! Transport seam: one request body in, one parsed response out.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::RpcError;

/// Sends a single serialized request and returns the parsed response
/// JSON. Implementations handle connection management internally; each
/// call is one outbound request with no retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, body: &Value) -> Result<Value, RpcError>;
}

/// HTTP transport: POSTs the request body to the resolved endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpTransport {
    pub fn new(url: reqwest::Url) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        HttpTransport { client, url }
    }

    /// The endpoint this transport posts to.
    pub fn url(&self) -> &reqwest::Url {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, body: &Value) -> Result<Value, RpcError> {
        let action = body
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        debug!(rpc.action = action, "rpc call");

        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Status(status));
        }

        let text = response.text().await?;
        debug!(rpc.action = action, %status, body_len = text.len(), "rpc response");
        trace!(rpc.action = action, body = %text, "rpc response body");

        serde_json::from_str(&text)
            .map_err(|e| RpcError::InvalidResponse(format!("decode response: {e}; body={text}")))
    }
}
