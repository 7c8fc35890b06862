//! SQLite backend for the client's durable key-value state.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteKvStore;

#[cfg(test)]
mod tests;
