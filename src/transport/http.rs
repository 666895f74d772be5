//! reqwest-backed transport
//!
//! One `reqwest::Client` is built per transport and reused for every
//! request, so connections are pooled across the whole process as long as
//! the transport is shared (it is cheap to clone).

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use super::{Method, Transport, TransportError, TransportRequest, TransportResponse};
use crate::config::ClientConfig;

/// HTTP transport over a shared reqwest connection pool
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the shared client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one shared with other parts of the host
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Option<TransportResponse>, TransportError> {
        debug!("{} {}", request.method, request.url);

        let timeout = request.timeout;
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url)
            .timeout(timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("HTTP transport error: {}", e);
            if e.is_timeout() {
                TransportError::TimedOut(timeout)
            } else if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Other(Box::new(e))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(Box::new(e)))?;

        debug!("HTTP {} ({} bytes)", status, body.len());
        Ok(Some(TransportResponse {
            status: Some(status),
            body: Some(body.to_vec()),
        }))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
