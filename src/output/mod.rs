//! Output renderers: plain number, JSON, and a one-line explanation.

pub mod explain;
pub mod json;
pub mod plain;

use crate::models::{Outcome, OutputFormat};

/// Trait for rendering an outcome to an output format.
pub trait OutputRenderer {
    /// Render the outcome to a string, without a trailing newline.
    fn render(&self, outcome: &Outcome) -> String;
}

/// Pick the renderer for `format`.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Plain => Box::new(plain::PlainRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
        OutputFormat::Explain => Box::new(explain::ExplainRenderer),
    }
}
