//! Configuration loading and layering.
//!
//! Handles `.adjuster.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{AdjustConfig, Config, ConfigError, OutputConfig};
