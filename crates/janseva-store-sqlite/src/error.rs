//! Error type for `janseva-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl From<Error> for janseva_core::Error {
  fn from(e: Error) -> Self { janseva_core::Error::Storage(e.to_string()) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
