//! Shared types used across all modules.
//!
//! The core result type ([`Outcome`]) plus the two policy enums that
//! config, CLI and output all need to agree on. Other modules import from
//! here rather than reaching into each other's internals.

pub mod outcome;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use outcome::{Branch, Outcome};

/// How addition and subtraction behave when the result leaves the `i64` range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OverflowMode {
    /// Two's-complement wraparound.
    #[default]
    Wrap,
    /// Fail the run with an overflow error.
    Checked,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturate,
}

/// Output format for the final value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// The bare number.
    #[default]
    Plain,
    /// Machine-readable object with the full outcome.
    Json,
    /// One human-readable line showing the comparison and arithmetic.
    Explain,
}
