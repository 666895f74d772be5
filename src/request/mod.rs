//! Typed request contract
//!
//! Each API endpoint is its own type implementing [`ApiRequest`]. The type
//! describes *what* to ask for (path, query, options) and how to decode
//! the answer; [`ApiClient`] does the sending.
//!
//! Replies are validated in a fixed order before decoding:
//!
//! ```text
//! transport error        -> Failure(Transport)
//! no response / status   -> Failure(NilResponse)
//! status not 2xx         -> Failure(HttpStatus)
//! no body                -> Failure(NoDataReturned)
//! zero-length body       -> Empty
//! decode error           -> Failure(Decode)
//! otherwise              -> Success
//! ```
//!
//! [`ApiClient`]: crate::client::ApiClient

mod breeds;
mod images;
mod outcome;

pub use breeds::ListBreeds;
pub use images::ListImages;
pub use outcome::Outcome;

use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::client::{ApiClient, RequestHandle};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{Method, TransportError, TransportRequest, TransportResponse};

/// Where a completion handler runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// Marshalled to the host's UI dispatcher before the handler runs
    #[default]
    UiContext,
    /// Runs on whatever runtime worker finished the transport call
    TransportContext,
}

/// Per-request knobs, all defaulted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Added after the configured headers
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    /// `None` uses the client's configured timeout
    pub timeout: Option<Duration>,
    pub delivery: Delivery,
}

/// A typed web request
pub trait ApiRequest: Send + Sync + 'static {
    type Response: Send + 'static;

    /// Path appended to the base URL, starting with `/`
    fn path(&self) -> String;

    /// Query parameters, in order
    fn query_params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn options(&self) -> RequestOptions {
        RequestOptions::default()
    }

    /// Decode a non-empty body
    fn decode(&self, body: &[u8]) -> Result<Self::Response, serde_json::Error>;

    /// Base URL + path, plus `?name=value&...` when there are query parameters
    fn build_url(&self, base_url: &str) -> Result<Url, ApiError> {
        let mut raw = format!("{}{}", base_url, self.path());

        let params = self.query_params();
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&");
            raw.push('?');
            raw.push_str(&query);
        }

        Url::parse(&raw).map_err(|source| ApiError::InvalidUrl { url: raw, source })
    }

    /// Assemble the wire request from this descriptor and the client config
    fn prepare(&self, config: &ClientConfig) -> Result<TransportRequest, ApiError> {
        let url = self.build_url(&config.base_url)?;
        let options = self.options();

        let mut headers: Vec<(String, String)> = config
            .headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.extend(options.headers);

        Ok(TransportRequest {
            method: options.method,
            url,
            headers,
            body: options.body,
            timeout: options.timeout.unwrap_or_else(|| config.timeout()),
        })
    }

    /// Start the request on `client`; see [`ApiClient::execute`]
    fn execute<F>(self, client: &ApiClient, on_complete: F) -> Result<RequestHandle, ApiError>
    where
        Self: Sized,
        F: FnOnce(Outcome<Self::Response>) + Send + 'static,
    {
        client.execute(self, on_complete)
    }
}

/// Turn a raw transport reply into an outcome
pub(crate) fn interpret<R: ApiRequest>(
    request: &R,
    reply: Result<Option<TransportResponse>, TransportError>,
) -> Outcome<R::Response> {
    let response = match reply {
        Err(err) => return Outcome::Failure(ApiError::Transport(err)),
        Ok(None) => return Outcome::Failure(ApiError::NilResponse),
        Ok(Some(response)) => response,
    };

    let Some(status) = response.status else {
        return Outcome::Failure(ApiError::NilResponse);
    };

    if !(200..300).contains(&status) {
        debug!("Request {} failed with HTTP {}", request.path(), status);
        return Outcome::Failure(ApiError::HttpStatus(status));
    }

    let Some(body) = response.body else {
        return Outcome::Failure(ApiError::NoDataReturned);
    };

    if body.is_empty() {
        return Outcome::Empty;
    }

    match request.decode(&body) {
        Ok(value) => Outcome::Success(value),
        Err(err) => {
            debug!("Failed to decode {} response: {}", request.path(), err);
            Outcome::Failure(ApiError::Decode(err))
        }
    }
}
