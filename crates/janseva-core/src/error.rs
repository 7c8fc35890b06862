//! Error types for `janseva-core`.

use thiserror::Error;

use crate::transport::Method;

/// Every failure a client call can surface.
///
/// `Storage` is the only variant the client absorbs locally; everything else
/// propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum Error {
  /// Network failure or a non-2xx response. `status` is `None` when the
  /// request never produced a response.
  #[error("{message}")]
  Transport { status: Option<u16>, message: String },

  /// A non-empty response body that is not valid JSON.
  #[error("malformed response body: {0}")]
  Parse(#[source] serde_json::Error),

  /// Valid JSON that does not have the expected shape, or a request body
  /// that could not be encoded.
  #[error("unexpected payload shape: {0}")]
  Decode(#[from] serde_json::Error),

  /// Mock mode was asked for an endpoint it has no fixture for.
  #[error("no mock implemented for {method} {endpoint}")]
  MockGap { method: Method, endpoint: String },

  /// The CSV report could not be encoded.
  #[error("report encoding failed: {0}")]
  Csv(#[from] csv::Error),

  #[error("storage error: {0}")]
  Storage(String),
}

impl Error {
  pub fn transport(status: impl Into<Option<u16>>, message: impl Into<String>) -> Self {
    Self::Transport { status: status.into(), message: message.into() }
  }

  pub fn not_found(what: impl std::fmt::Display) -> Self {
    Self::transport(404, format!("{what} not found"))
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::transport(400, message)
  }

  /// HTTP status carried by the error, if any.
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Transport { status, .. } => *status,
      Self::MockGap { .. } => Some(501),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
