//! Typed API client for the Janseva field app.
//!
//! One [`ApiClient`] serves every resource the app needs. It owns the
//! bearer-token lifecycle and delegates the actual exchange to a
//! [`Transport`](janseva_core::Transport): [`HttpTransport`] for a live
//! backend, [`MockTransport`](janseva_mock::MockTransport) for in-memory
//! fixtures. [`AnyTransport`] picks one from [`ClientConfig`] at startup.
//!
//! ```rust,ignore
//! let config = ClientConfig { use_mock: true, ..Default::default() };
//! let client = ApiClient::from_config(&config, MemoryKvStore::new())?;
//! client.login("9999900000", "123456").await?;
//! let pending = client
//!   .get_applications(&ApplicationFilter {
//!     status: Some(ApplicationStatus::Pending),
//!     ..Default::default()
//!   })
//!   .await?;
//! ```

pub mod client;
pub mod config;
pub mod http;
mod resources;
pub mod transport;

pub use client::{ApiClient, TOKEN_KEY};
pub use config::ClientConfig;
pub use http::HttpTransport;
pub use transport::AnyTransport;
