//! Support code for the `janseva` binary: layered configuration and the
//! mock-backend dev server.

pub mod config;
pub mod serve;

pub use config::CliConfig;
