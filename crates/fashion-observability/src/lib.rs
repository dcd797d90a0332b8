//! Observability for the Clear Fashion client.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Config-friendly logging knobs
//! - `LoggingConfig` - Both together, deserializable from TOML
//! - `init` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;
