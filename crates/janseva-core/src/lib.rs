//! Core types and trait definitions for the Janseva field client.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! defines the wire records, the pagination and query-string contracts, and
//! the two seams the client is built on: [`Transport`] and
//! [`KeyValueStore`].

pub mod error;
pub mod kv;
pub mod model;
pub mod pagination;
pub mod query;
pub mod search;
pub mod transport;

pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryKvStore};
pub use pagination::{ListResponse, PaginationMeta, paginate};
pub use query::{QueryParams, QueryString};
pub use transport::{ApiRequest, Method, Transport};
