//! In-memory backend for development and tests.
//!
//! [`MockStore`] owns the fixture arrays and answers requests the same way
//! the real API does (pagination, filtering, create/update/delete).
//! [`MockTransport`] wraps a store behind the
//! [`Transport`](janseva_core::Transport) seam and adds artificial latency.
//!
//! Stores are plain values: tests build as many independent ones as they
//! need.

mod fixtures;
pub mod matching;
mod router;
pub mod store;
pub mod transport;

pub use store::MockStore;
pub use transport::{DEFAULT_LATENCY, MockTransport};

#[cfg(test)]
mod tests;
