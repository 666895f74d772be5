//! Transport abstraction
//!
//! The request contract never talks to the network itself. It hands a
//! fully-assembled [`TransportRequest`] to a [`Transport`] and validates
//! whatever comes back. This keeps the contract testable with a fake
//! transport and lets hosts bring their own HTTP stack.
//!
//! - `HttpTransport` (feature `http`): reqwest with one pooled client
//! - Fakes in tests

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpTransport;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to go on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    /// Config headers first, then per-request headers
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

impl TransportRequest {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What the transport got back
///
/// Both fields are optional because not every transport can guarantee
/// them; the request contract decides what a missing piece means.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportResponse {
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// Response with a status and a body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
        }
    }
}

/// Transport-native failures, passed through to callers unchanged
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Something that can carry a request to a server and bring a reply back
///
/// `Ok(None)` means the exchange finished without producing an HTTP
/// response at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Option<TransportResponse>, TransportError>;

    /// Transport identifier for logging
    fn name(&self) -> &'static str;
}
