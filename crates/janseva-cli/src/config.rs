//! Layered CLI configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the optional TOML
//! file, then `JANSEVA_*` environment variables. Nested keys use `__`, so
//! `JANSEVA_CLIENT__USE_MOCK=false` maps to `client.use_mock`. Command-line
//! flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use janseva_client::ClientConfig;
use serde::Deserialize;

pub const DEFAULT_STORE_PATH: &str = "~/.janseva/state.db";

/// Everything the binary reads from config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  pub client:     ClientConfig,
  /// SQLite file holding the persisted token. A leading `~/` is expanded.
  pub store_path: PathBuf,
  pub serve:      ServeConfig,
}

/// Bind address for `serve-mock`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
  pub host: String,
  pub port: u16,
}

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      client:     ClientConfig::default(),
      store_path: PathBuf::from(DEFAULT_STORE_PATH),
      serve:      ServeConfig::default(),
    }
  }
}

impl Default for ServeConfig {
  fn default() -> Self { Self { host: "127.0.0.1".into(), port: 8787 } }
}

impl CliConfig {
  /// Read `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("JANSEVA")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings.try_deserialize().context("failed to deserialise CliConfig")
  }

  pub fn store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = CliConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.client, ClientConfig::default());
    assert_eq!(cfg.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    assert_eq!(cfg.serve.port, 8787);
  }

  #[test]
  fn file_values_override_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
      file,
      r#"
store_path = "/tmp/janseva-test.db"

[client]
use_mock = false
use_staging = true
timeout_secs = 5

[serve]
port = 9000
"#
    )
    .unwrap();

    let cfg = CliConfig::load(file.path()).unwrap();
    assert!(!cfg.client.use_mock);
    assert!(cfg.client.use_staging);
    assert_eq!(cfg.client.timeout_secs, 5);
    assert_eq!(cfg.client.mock_latency_ms, 500);
    assert_eq!(cfg.store_path(), PathBuf::from("/tmp/janseva-test.db"));
    assert_eq!(cfg.serve, ServeConfig { host: "127.0.0.1".into(), port: 9000 });
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(expand_tilde(Path::new("~/.janseva/state.db")), PathBuf::from(home).join(".janseva/state.db"));
    assert_eq!(expand_tilde(Path::new("/abs/state.db")), PathBuf::from("/abs/state.db"));
  }
}
