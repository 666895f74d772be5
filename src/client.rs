//! Request execution
//!
//! [`ApiClient`] bundles everything a request needs to run: the
//! configuration, the transport, the runtime to spawn on and, for
//! UI-affine requests, a [`UiDispatcher`]. It is built once by the host and
//! passed to whoever starts requests; there is no global client.
//!
//! ```text
//! execute(request, on_complete)
//!     │  prepare (URL errors returned here, synchronously)
//!     ▼
//! runtime task ── transport.send ── interpret
//!     │
//!     ├─ Delivery::TransportContext → on_complete on the worker
//!     └─ Delivery::UiContext        → UiDispatcher → UiQueue (host UI thread)
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::request::{interpret, ApiRequest, Delivery, Outcome};
use crate::transport::{Transport, TransportRequest};

type UiTask = Box<dyn FnOnce() + Send>;

/// Create a connected dispatcher/queue pair
///
/// The host keeps the [`UiQueue`] on its UI-owning thread and drains it;
/// the [`UiDispatcher`] goes into the client.
pub fn ui_channel() -> (UiDispatcher, UiQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiDispatcher { tx }, UiQueue { rx })
}

/// Sending half: posts completions to the UI context
#[derive(Clone)]
pub struct UiDispatcher {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl UiDispatcher {
    /// Queue `task` for the UI context. Returns false if the queue is gone.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) -> bool {
        if self.tx.send(Box::new(task)).is_err() {
            debug!("UI queue closed; dropping completion");
            return false;
        }
        true
    }
}

/// Receiving half, owned by the UI context
pub struct UiQueue {
    rx: mpsc::UnboundedReceiver<UiTask>,
}

impl UiQueue {
    /// Run every completion that is already queued, without waiting
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            ran += 1;
        }
        ran
    }

    /// Wait for the next completion and run it. Returns false once every
    /// dispatcher has been dropped and the queue is drained.
    pub async fn run_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

/// Handle to an in-flight request
///
/// Dropping the handle does not cancel the request.
#[derive(Debug)]
pub struct RequestHandle {
    abort: AbortHandle,
    cancelled: Arc<AtomicBool>,
}

impl RequestHandle {
    /// Stop the request; its completion handler will not run afterwards
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            debug!("Cancelling request");
        }
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// The background task has finished (completed or cancelled)
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

/// One in-flight request per screen
///
/// Starting a new request through the slot cancels the one it replaces, so
/// two completions never race to update the same view state.
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: Option<RequestHandle>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, cancelling any previous request
    pub fn replace(&mut self, handle: RequestHandle) {
        if let Some(previous) = self.current.replace(handle) {
            if !previous.is_finished() {
                debug!("Superseding in-flight request");
            }
            previous.cancel();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }

    /// A request is stored and has not finished yet
    pub fn is_busy(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

/// Shared context for running requests
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    runtime: Handle,
    ui: Option<UiDispatcher>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>, runtime: Handle) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            runtime,
            ui: None,
        }
    }

    /// Client over the reqwest transport
    #[cfg(feature = "http")]
    pub fn with_http(config: ClientConfig, runtime: Handle) -> anyhow::Result<Self> {
        let transport = crate::transport::HttpTransport::new(&config)?;
        Ok(Self::new(config, Arc::new(transport), runtime))
    }

    /// Attach the dispatcher UI-affine completions are delivered through
    pub fn with_ui_dispatcher(mut self, ui: UiDispatcher) -> Self {
        self.ui = Some(ui);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run `request` and wait for its outcome
    ///
    /// Delivery affinity does not apply here; the caller awaits in its own
    /// context. An invalid URL comes back as `Failure(InvalidUrl)`.
    pub async fn fetch<R: ApiRequest>(&self, request: &R) -> Outcome<R::Response> {
        match request.prepare(&self.config) {
            Ok(prepared) => send(self.transport.as_ref(), request, prepared).await,
            Err(err) => Outcome::Failure(err),
        }
    }

    /// Start `request` in the background and return immediately
    ///
    /// `on_complete` runs exactly once, never before this call returns,
    /// unless the handle is cancelled first. Requests declaring
    /// [`Delivery::UiContext`] complete through the UI dispatcher.
    ///
    /// Configuration errors (an invalid URL, a UI-affine request on a
    /// client without a dispatcher) are returned here and nothing is sent.
    pub fn execute<R, F>(&self, request: R, on_complete: F) -> Result<RequestHandle, ApiError>
    where
        R: ApiRequest,
        F: FnOnce(Outcome<R::Response>) + Send + 'static,
    {
        let prepared = request.prepare(&self.config)?;

        let ui = match request.options().delivery {
            Delivery::UiContext => Some(self.ui.clone().ok_or(ApiError::NoUiDispatcher)?),
            Delivery::TransportContext => None,
        };

        let cancelled = Arc::new(AtomicBool::new(false));
        let task_cancelled = Arc::clone(&cancelled);
        let transport = Arc::clone(&self.transport);

        let task = self.runtime.spawn(async move {
            let outcome = send(transport.as_ref(), &request, prepared).await;

            match ui {
                Some(ui) => {
                    ui.post(move || {
                        if !task_cancelled.load(Ordering::SeqCst) {
                            on_complete(outcome);
                        }
                    });
                }
                None => {
                    if !task_cancelled.load(Ordering::SeqCst) {
                        on_complete(outcome);
                    }
                }
            }
        });

        Ok(RequestHandle {
            abort: task.abort_handle(),
            cancelled,
        })
    }
}

async fn send<R: ApiRequest>(
    transport: &dyn Transport,
    request: &R,
    prepared: TransportRequest,
) -> Outcome<R::Response> {
    debug!(
        "Sending {} {} via {}",
        prepared.method,
        prepared.url,
        transport.name()
    );
    let reply = transport.send(prepared).await;
    let outcome = interpret(request, reply);

    match &outcome {
        Outcome::Success(_) => debug!("{} succeeded", request.path()),
        Outcome::Empty => debug!("{} returned an empty body", request.path()),
        Outcome::Failure(err) => debug!("{} failed: {}", request.path(), err),
    }
    outcome
}
