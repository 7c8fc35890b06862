//! [`ApiClient`]: token lifecycle and request dispatch.

use std::sync::Arc;

use janseva_core::{ApiRequest, KeyValueStore, Result, Transport};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::{
  sync::{Mutex, RwLock},
  task::JoinHandle,
};
use tracing::{debug, warn};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Default)]
struct TokenSlot {
  token:   Option<String>,
  /// Set once login or logout has written the slot. The startup load only
  /// fills a slot nobody has touched.
  touched: bool,
}

/// The typed client. Resource methods live in `resources/`.
///
/// `T` answers requests; `S` persists the bearer token between runs.
pub struct ApiClient<T, S> {
  transport: T,
  store:     Arc<S>,
  token:     Arc<RwLock<TokenSlot>>,
  loader:    Mutex<Option<JoinHandle<()>>>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  /// Build a client and start loading the persisted token in the background.
  ///
  /// Must be called inside a tokio runtime. Requests sent before the load
  /// finishes go out anonymously; await [`ready`](Self::ready) to avoid that.
  pub fn new(transport: T, store: S) -> Self {
    let store = Arc::new(store);
    let token = Arc::new(RwLock::new(TokenSlot::default()));
    let loader = tokio::spawn(load_token(store.clone(), token.clone()));
    Self { transport, store, token, loader: Mutex::new(Some(loader)) }
  }

  /// Wait for the startup token load to finish. Cheap after the first call.
  pub async fn ready(&self) {
    let handle = self.loader.lock().await.take();
    if let Some(handle) = handle
      && let Err(e) = handle.await
    {
      warn!("token load task failed: {e}");
    }
  }

  pub fn transport(&self) -> &T { &self.transport }

  pub async fn token(&self) -> Option<String> { self.token.read().await.token.clone() }

  pub async fn is_authenticated(&self) -> bool { self.token.read().await.token.is_some() }

  /// Send `request` and decode the response as `R`.
  ///
  /// Unless `skip_auth` is set, the current token (if any) is attached as a
  /// bearer credential.
  pub async fn request<R: DeserializeOwned>(
    &self,
    request: ApiRequest,
    skip_auth: bool,
  ) -> Result<R> {
    let value = self.request_value(request, skip_auth).await?;
    Ok(serde_json::from_value(value)?)
  }

  /// [`request`](Self::request) without decoding.
  pub async fn request_value(&self, request: ApiRequest, skip_auth: bool) -> Result<Value> {
    let bearer = if skip_auth { None } else { self.token().await };
    let request = request.bearer(bearer);
    debug!(
      method = %request.method,
      endpoint = %request.endpoint,
      authed = request.bearer.is_some(),
      "dispatch"
    );
    self.transport.send(request).await
  }

  // ── Token state ─────────────────────────────────────────────────────────

  /// Make `token` current, then persist it. A failed write is logged only.
  pub(crate) async fn set_token(&self, token: String) {
    {
      let mut slot = self.token.write().await;
      slot.token   = Some(token.clone());
      slot.touched = true;
    }
    if let Err(e) = self.store.set(TOKEN_KEY, &token).await {
      warn!("failed to persist auth token: {e}");
    }
  }

  /// Forget the token, then remove it from storage. A failed remove is
  /// logged only.
  pub(crate) async fn clear_token(&self) {
    {
      let mut slot = self.token.write().await;
      slot.token   = None;
      slot.touched = true;
    }
    if let Err(e) = self.store.remove(TOKEN_KEY).await {
      warn!("failed to remove persisted auth token: {e}");
    }
  }
}

async fn load_token<S: KeyValueStore>(store: Arc<S>, slot: Arc<RwLock<TokenSlot>>) {
  let loaded = match store.get(TOKEN_KEY).await {
    Ok(token) => token,
    Err(e) => {
      warn!("failed to load persisted auth token: {e}");
      return;
    }
  };
  let mut slot = slot.write().await;
  if slot.touched {
    debug!("token changed during startup load; keeping the newer state");
    return;
  }
  slot.token = loaded;
}
