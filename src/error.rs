use thiserror::Error;

use crate::transport::TransportError;

/// Everything that can turn a request into `Outcome::Failure`
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered outside the 2xx range
    #[error("HTTP error: status code {0}")]
    HttpStatus(u16),

    /// The transport produced no usable HTTP response (or one without a status)
    #[error("No HTTP response was received")]
    NilResponse,

    /// The transport succeeded but supplied no body at all
    #[error("No data was returned by the server")]
    NoDataReturned,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL plus path did not form a valid URL. This is a configuration
    /// mistake; `execute` reports it synchronously and never starts the call.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A UI-affine request was executed on a client without a UI dispatcher
    #[error("Request requires a UI dispatcher but the client has none")]
    NoUiDispatcher,
}

impl ApiError {
    /// Status code for `HttpStatus` failures
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Configuration errors are programmer mistakes rather than runtime conditions
    pub fn is_configuration(&self) -> bool {
        matches!(self, ApiError::InvalidUrl { .. } | ApiError::NoUiDispatcher)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
