//! Explain renderer: one styled line showing the comparison and the arithmetic.
//!
//! `3 < 5: 3 + 4 = 7`, `10 > 5: 10 - 2 = 8`, `5 = 5: unchanged, 5`.

use colored::Colorize;

use crate::models::{Branch, Outcome};
use crate::output::OutputRenderer;

pub struct ExplainRenderer;

impl OutputRenderer for ExplainRenderer {
    fn render(&self, outcome: &Outcome) -> String {
        let comparison = match outcome.branch {
            Branch::Add => '<',
            Branch::Subtract => '>',
            Branch::Unchanged => '=',
        };
        let head = format!("{} {} {}:", outcome.initial, comparison, outcome.threshold);
        let result = outcome.result.to_string().green().bold();

        match (outcome.branch.symbol(), outcome.operand) {
            (Some(op), Some(operand)) => format!(
                "{} {} {} {} = {}",
                head.dimmed(),
                outcome.initial,
                op,
                operand,
                result
            ),
            _ => format!("{} {}, {}", head.dimmed(), "unchanged".cyan(), result),
        }
    }
}
