//! The `Transport` seam between the client and a backend.
//!
//! A transport turns one [`ApiRequest`] into one JSON value. The client never
//! knows whether that value came from the network or from fixtures, and the
//! transport never knows about token state: the caller decides whether a
//! bearer token rides along.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// HTTP verbs used by the API.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
  Get,
  Post,
  Put,
  Delete,
}

/// A fully-shaped request: verb, path plus query string, optional JSON body
/// and optional bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
  pub method:   Method,
  /// Path relative to the base URL, including any `?query`.
  pub endpoint: String,
  pub body:     Option<Value>,
  pub bearer:   Option<String>,
}

impl ApiRequest {
  pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
    Self { method, endpoint: endpoint.into(), body: None, bearer: None }
  }

  pub fn get(endpoint: impl Into<String>) -> Self { Self::new(Method::Get, endpoint) }

  pub fn post(endpoint: impl Into<String>) -> Self { Self::new(Method::Post, endpoint) }

  pub fn put(endpoint: impl Into<String>) -> Self { Self::new(Method::Put, endpoint) }

  pub fn delete(endpoint: impl Into<String>) -> Self { Self::new(Method::Delete, endpoint) }

  /// Attach `body` serialised as JSON.
  pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
    self.body = Some(serde_json::to_value(body)?);
    Ok(self)
  }

  pub fn bearer(mut self, token: Option<String>) -> Self {
    self.bearer = token;
    self
  }

  /// The path component, without the query string.
  pub fn path(&self) -> &str {
    self.endpoint.split_once('?').map_or(self.endpoint.as_str(), |(p, _)| p)
  }

  /// The raw query string, without the leading `?`.
  pub fn query(&self) -> &str {
    self.endpoint.split_once('?').map_or("", |(_, q)| q)
  }
}

/// Something that can answer an [`ApiRequest`].
///
/// Implementations resolve to the decoded JSON body. An empty successful
/// response resolves to `{}`.
pub trait Transport: Send + Sync {
  fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value>> + Send + '_;
}
