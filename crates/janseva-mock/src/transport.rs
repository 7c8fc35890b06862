//! [`MockTransport`]: the fixture-backed [`Transport`].

use std::{
  sync::{Arc, Mutex},
  time::Duration,
};

use janseva_core::{ApiRequest, Result, Transport};
use serde_json::Value;

use crate::MockStore;

/// Artificial latency applied to every mock call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Serves requests from a [`MockStore`] after a fixed delay, regardless of
/// network availability.
///
/// Cloning is cheap and clones share the same store.
#[derive(Clone)]
pub struct MockTransport {
  store:   Arc<Mutex<MockStore>>,
  latency: Duration,
}

impl MockTransport {
  pub fn new(store: MockStore) -> Self {
    Self { store: Arc::new(Mutex::new(store)), latency: DEFAULT_LATENCY }
  }

  pub fn with_latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }

  pub fn latency(&self) -> Duration { self.latency }

  /// Run `f` against the current store contents.
  pub fn inspect<R>(&self, f: impl FnOnce(&MockStore) -> R) -> R {
    let guard = self.store.lock().unwrap_or_else(|e| e.into_inner());
    f(&guard)
  }
}

impl std::fmt::Debug for MockTransport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MockTransport").field("latency", &self.latency).finish_non_exhaustive()
  }
}

impl Transport for MockTransport {
  async fn send(&self, request: ApiRequest) -> Result<Value> {
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }
    tracing::debug!(method = %request.method, endpoint = %request.endpoint, "mock request");

    let mut store = self.store.lock().unwrap_or_else(|e| e.into_inner());
    let result = store.handle(&request);
    if let Err(e) = &result {
      tracing::debug!(error = %e, "mock request failed");
    }
    result
  }
}
