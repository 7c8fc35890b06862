//! [`AnyTransport`]: the transport chosen from [`ClientConfig`] at startup.

use janseva_core::{ApiRequest, KeyValueStore, Result, Transport};
use janseva_mock::{MockStore, MockTransport};
use serde_json::Value;

use crate::{ApiClient, ClientConfig, HttpTransport};

/// Either backend behind one concrete type.
#[derive(Debug, Clone)]
pub enum AnyTransport {
  Mock(MockTransport),
  Http(HttpTransport),
}

impl AnyTransport {
  /// Seeded fixtures when `use_mock` is set, otherwise HTTP against the
  /// configured production or staging URL.
  pub fn from_config(config: &ClientConfig) -> Result<Self> {
    if config.use_mock {
      tracing::info!(latency_ms = config.mock_latency_ms, "using mock backend");
      Ok(Self::Mock(MockTransport::new(MockStore::seeded()).with_latency(config.mock_latency())))
    } else {
      tracing::info!(base_url = config.base_url(), "using http backend");
      Ok(Self::Http(HttpTransport::new(config.base_url(), config.timeout())?))
    }
  }

  pub fn is_mock(&self) -> bool { matches!(self, Self::Mock(_)) }
}

impl Transport for AnyTransport {
  async fn send(&self, request: ApiRequest) -> Result<Value> {
    match self {
      Self::Mock(t) => t.send(request).await,
      Self::Http(t) => t.send(request).await,
    }
  }
}

impl<S: KeyValueStore> ApiClient<AnyTransport, S> {
  pub fn from_config(config: &ClientConfig, store: S) -> Result<Self> {
    Ok(Self::new(AnyTransport::from_config(config)?, store))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_selects_backend() {
    let mock = AnyTransport::from_config(&ClientConfig::default()).unwrap();
    assert!(mock.is_mock());

    let live = ClientConfig { use_mock: false, use_staging: true, ..Default::default() };
    match AnyTransport::from_config(&live).unwrap() {
      AnyTransport::Http(t) => assert_eq!(t.base_url(), crate::config::STAGING_URL),
      AnyTransport::Mock(_) => panic!("expected http transport"),
    }
  }
}
