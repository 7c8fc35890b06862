//! Tests for `SqliteKvStore` against in-memory and on-disk databases.

use janseva_core::KeyValueStore;

use crate::SqliteKvStore;

async fn store() -> SqliteKvStore {
  SqliteKvStore::open_in_memory().await.expect("in-memory store")
}

#[tokio::test]
async fn missing_key_is_none() {
  let s = store().await;
  assert_eq!(s.get("auth_token").await.unwrap(), None);
}

#[tokio::test]
async fn set_overwrites_previous_value() {
  let s = store().await;
  s.set("auth_token", "first").await.unwrap();
  s.set("auth_token", "second").await.unwrap();

  assert_eq!(s.get("auth_token").await.unwrap().as_deref(), Some("second"));
  assert_eq!(s.keys().await.unwrap(), ["auth_token"]);
}

#[tokio::test]
async fn remove_is_idempotent() {
  let s = store().await;
  s.set("auth_token", "tok").await.unwrap();
  s.set("other", "x").await.unwrap();

  s.remove("auth_token").await.unwrap();
  s.remove("auth_token").await.unwrap();

  assert_eq!(s.get("auth_token").await.unwrap(), None);
  assert_eq!(s.get("other").await.unwrap().as_deref(), Some("x"));
}

#[tokio::test]
async fn values_survive_reopen() {
  let dir  = tempfile::tempdir().unwrap();
  let path = dir.path().join("state.db");

  {
    let s = SqliteKvStore::open(&path).await.unwrap();
    s.set("auth_token", "persisted").await.unwrap();
  }

  let reopened = SqliteKvStore::open(&path).await.unwrap();
  assert_eq!(reopened.get("auth_token").await.unwrap().as_deref(), Some("persisted"));
}

#[tokio::test]
async fn storage_error_maps_into_core_storage() {
  let dir = tempfile::tempdir().unwrap();
  // A directory cannot be opened as a database file.
  let err = SqliteKvStore::open(dir.path()).await.err().expect("open should fail");
  let core: janseva_core::Error = err.into();
  assert!(matches!(core, janseva_core::Error::Storage(_)));
}
