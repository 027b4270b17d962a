//! Plain renderer: the bare result.

use crate::models::Outcome;
use crate::output::OutputRenderer;

pub struct PlainRenderer;

impl OutputRenderer for PlainRenderer {
    fn render(&self, outcome: &Outcome) -> String {
        outcome.result.to_string()
    }
}
