//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use breedview::{
    ApiClient, ClientConfig, Transport, TransportError, TransportRequest, TransportResponse,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use tokio::runtime::Handle;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::new("breedview=debug"))
            .try_init();
    });
}

/// Canned reply for one path
#[derive(Clone)]
pub enum Reply {
    Response(TransportResponse),
    NoResponse,
    ConnectError(&'static str),
}

/// In-memory transport keyed by URL path
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<HashMap<String, Reply>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `path` with `status` and a JSON/text body
    pub fn respond(self, path: &str, status: u16, body: &str) -> Self {
        self.reply(path, Reply::Response(TransportResponse::new(status, body)))
    }

    pub fn reply(self, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), reply);
        self
    }

    /// Every request seen so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<Option<TransportResponse>, TransportError> {
        let path = request.url.path().to_string();
        self.requests.lock().unwrap().push(request);

        let reply = self.replies.lock().unwrap().get(&path).cloned();
        match reply {
            Some(Reply::Response(response)) => Ok(Some(response)),
            Some(Reply::NoResponse) => Ok(None),
            Some(Reply::ConnectError(message)) => Err(TransportError::Connect(message.to_string())),
            None => Ok(Some(TransportResponse::new(404, r#"{"status": "error"}"#))),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Client against `http://api.test` backed by `transport`
pub fn test_client(transport: Arc<FakeTransport>) -> ApiClient {
    let config = ClientConfig::default().with_base_url("http://api.test/api");
    ApiClient::new(config, transport, Handle::current())
}

pub const BREEDS_BODY: &str = r#"{
    "message": {
        "akita": [],
        "hound": ["afghan", "basset"],
        "bulldog": ["french", "english", "boston"],
        "beagle": []
    },
    "status": "success"
}"#;
