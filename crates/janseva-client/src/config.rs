//! Client configuration, fixed at construction time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const PRODUCTION_URL: &str = "https://api.janseva.in/v1";
pub const STAGING_URL: &str = "https://staging-api.janseva.in/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MOCK_LATENCY_MS: u64 = janseva_mock::DEFAULT_LATENCY.as_millis() as u64;

/// The two independent switches plus the knobs behind them.
///
/// `use_staging` only matters when `use_mock` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  pub use_staging:     bool,
  pub use_mock:        bool,
  pub mock_latency_ms: u64,
  pub timeout_secs:    u64,
  pub production_url:  String,
  pub staging_url:     String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      use_staging:     false,
      use_mock:        true,
      mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
      timeout_secs:    DEFAULT_TIMEOUT_SECS,
      production_url:  PRODUCTION_URL.to_owned(),
      staging_url:     STAGING_URL.to_owned(),
    }
  }
}

impl ClientConfig {
  pub fn base_url(&self) -> &str {
    if self.use_staging { &self.staging_url } else { &self.production_url }
  }

  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

  pub fn mock_latency(&self) -> Duration { Duration::from_millis(self.mock_latency_ms) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn staging_flag_selects_base_url() {
    let mut cfg = ClientConfig::default();
    assert_eq!(cfg.base_url(), PRODUCTION_URL);
    cfg.use_staging = true;
    assert_eq!(cfg.base_url(), STAGING_URL);
  }

  #[test]
  fn missing_keys_fall_back_to_defaults() {
    let cfg: ClientConfig = serde_json::from_value(serde_json::json!({ "use_mock": false })).unwrap();
    assert!(!cfg.use_mock);
    assert_eq!(cfg.timeout(), Duration::from_secs(30));
    assert_eq!(cfg.mock_latency(), Duration::from_millis(500));
  }

  #[test]
  fn default_latency_matches_the_mock_transport() {
    assert_eq!(ClientConfig::default().mock_latency(), janseva_mock::DEFAULT_LATENCY);
  }
}
