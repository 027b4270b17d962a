//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the default threshold so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "adjuster";

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.adjuster.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".adjuster.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "adjuster";

/// Comparison point that selects the add / subtract / unchanged branch.
pub const DEFAULT_THRESHOLD: i64 = 5;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_THRESHOLD: &str = "ADJUSTER_THRESHOLD";
pub const ENV_OVERFLOW: &str = "ADJUSTER_OVERFLOW";
pub const ENV_FORMAT: &str = "ADJUSTER_FORMAT";
pub const ENV_LOG: &str = "ADJUSTER_LOG";
