//! JSON output renderer.
//!
//! Outputs the full [`Outcome`] so scripts can see which branch ran and how
//! many integers were consumed.

use crate::models::Outcome;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, outcome: &Outcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }
}
