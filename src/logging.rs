//! Diagnostic logging on stderr.
//!
//! Stdout carries only the result, so every event goes to stderr through a
//! `tracing-subscriber` fmt layer. `ADJUSTER_LOG` (an `EnvFilter`
//! directive) wins over the `-v` / `-q` flags.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Level implied by the command-line flags.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter from the environment, falling back to the flag level.
pub fn filter(verbose: u8, quiet: bool, env: &Env) -> EnvFilter {
    let fallback = || EnvFilter::new(level_for(verbose, quiet).to_string());
    match env.var(ENV_LOG) {
        Ok(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("Warning: ignoring invalid {ENV_LOG} value: {e}");
            fallback()
        }),
        Err(_) => fallback(),
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8, quiet: bool, env: &Env) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, quiet, env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
