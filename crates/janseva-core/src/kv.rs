//! The `KeyValueStore` trait: durable string storage for client state.
//!
//! The client keeps exactly one key here (the bearer token). Backends live in
//! other crates (`janseva-store-sqlite`); [`MemoryKvStore`] is the in-process
//! implementation used by tests and throwaway sessions.

use std::{
  collections::HashMap,
  convert::Infallible,
  future::Future,
  sync::{Arc, Mutex},
};

/// Abstraction over a durable key-value backend.
///
/// All methods return `Send` futures so the client can drive them from a
/// spawned tokio task.
pub trait KeyValueStore: Send + Sync + 'static {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read `key`. Returns `None` if it was never written or was removed.
  fn get<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Write `value` under `key`, replacing any previous value.
  fn set<'a>(
    &'a self,
    key: &'a str,
    value: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove `key`. Removing a missing key is not an error.
  fn remove<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

/// A [`KeyValueStore`] that lives for the process lifetime.
///
/// Cloning is cheap and clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
  entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKvStore {
  pub fn new() -> Self { Self::default() }

  fn with<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
    // A poisoned map still holds consistent strings; keep using it.
    let mut guard = self.entries.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut guard)
  }
}

impl KeyValueStore for MemoryKvStore {
  type Error = Infallible;

  async fn get(&self, key: &str) -> Result<Option<String>, Infallible> {
    Ok(self.with(|m| m.get(key).cloned()))
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), Infallible> {
    self.with(|m| m.insert(key.to_owned(), value.to_owned()));
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), Infallible> {
    self.with(|m| m.remove(key));
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn set_get_remove() {
    let kv = MemoryKvStore::new();
    assert_eq!(kv.get("auth_token").await.unwrap(), None);

    kv.set("auth_token", "abc").await.unwrap();
    assert_eq!(kv.get("auth_token").await.unwrap().as_deref(), Some("abc"));

    kv.set("auth_token", "def").await.unwrap();
    assert_eq!(kv.get("auth_token").await.unwrap().as_deref(), Some("def"));

    kv.remove("auth_token").await.unwrap();
    kv.remove("auth_token").await.unwrap();
    assert_eq!(kv.get("auth_token").await.unwrap(), None);
  }

  #[tokio::test]
  async fn clones_share_state() {
    let a = MemoryKvStore::new();
    let b = a.clone();
    a.set("k", "v").await.unwrap();
    assert_eq!(b.get("k").await.unwrap().as_deref(), Some("v"));
  }
}
