//! Typed client and catalog model for the dog.ceo breed image API
//!
//! - [`request`]: endpoint descriptors and the tri-state [`Outcome`]
//! - [`client`]: execution over an injected [`Transport`]
//! - [`catalog`]: breed tree decoding, alphabetic sections, search
//! - [`browser`]: per-screen snapshot state built on the above

pub mod browser;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod logging;
pub mod request;
pub mod transport;

pub use catalog::{AlphabeticSection, Breed, BreedCatalog};
pub use client::{ui_channel, ApiClient, RequestHandle, RequestSlot, UiDispatcher, UiQueue};
pub use config::ClientConfig;
pub use error::ApiError;
pub use images::DogImage;
pub use request::{ApiRequest, Delivery, ListBreeds, ListImages, Outcome, RequestOptions};
pub use transport::{Transport, TransportError, TransportRequest, TransportResponse};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
