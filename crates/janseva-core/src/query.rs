//! Query-string building and parsing.
//!
//! [`QueryString`] is what resource methods use to encode their filters: a
//! parameter the caller did not provide never appears, not even as `key=`.
//! [`QueryParams`] is the inverse, used by the mock router.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{Error, Result};

/// Builder for `?k=v&...` suffixes. Pairs keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
  pairs: Vec<(&'static str, String)>,
}

impl QueryString {
  pub fn new() -> Self { Self::default() }

  /// Append `key=value` if `value` is `Some` and renders non-empty.
  pub fn opt<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
    if let Some(v) = value {
      let rendered = v.to_string();
      if !rendered.is_empty() {
        self.pairs.push((key, rendered));
      }
    }
    self
  }

  pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

  pub fn contains_key(&self, key: &str) -> bool { self.pairs.iter().any(|(k, _)| *k == key) }

  /// `""` when empty, otherwise `?k=v&k2=v2` with values percent-encoded.
  pub fn finish(&self) -> String {
    if self.pairs.is_empty() {
      return String::new();
    }
    let joined = self
      .pairs
      .iter()
      .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
      .collect::<Vec<_>>()
      .join("&");
    format!("?{joined}")
  }

  /// `path` followed by [`finish`](Self::finish).
  pub fn append_to(&self, path: &str) -> String { format!("{path}{}", self.finish()) }
}

/// A decoded query string with typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
  /// Decode `raw` (with or without a leading `?`). Later duplicates win.
  pub fn parse(raw: &str) -> Result<Self> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    serde_urlencoded::from_str::<HashMap<String, String>>(raw)
      .map(Self)
      .map_err(|e| Error::bad_request(format!("invalid query string: {e}")))
  }

  /// Raw value for `key`; empty values count as absent.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
  }

  /// Typed value for `key`; a value that does not parse counts as absent.
  pub fn get_as<T: FromStr>(&self, key: &str) -> Option<T> { self.get(key)?.parse().ok() }
}
