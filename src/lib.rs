//! adjuster — read an integer, conditionally adjust it, print the result
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod adjust;
pub mod config;
pub mod constants;
pub mod env;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;

pub use adjust::{AdjustError, Policy, adjust, run};
