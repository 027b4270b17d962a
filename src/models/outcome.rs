//! The result of one adjustment pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which arm of the threshold comparison ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// `x < threshold`: a second value was read and added.
    Add,
    /// `x > threshold`: a second value was read and subtracted.
    Subtract,
    /// `x == threshold`: nothing else was read.
    Unchanged,
}

impl Branch {
    /// Select the branch for `x` against `threshold`.
    pub fn select(x: i64, threshold: i64) -> Self {
        match x.cmp(&threshold) {
            std::cmp::Ordering::Less => Branch::Add,
            std::cmp::Ordering::Greater => Branch::Subtract,
            std::cmp::Ordering::Equal => Branch::Unchanged,
        }
    }

    /// Whether this branch reads a second integer.
    pub fn needs_operand(self) -> bool {
        !matches!(self, Branch::Unchanged)
    }

    /// Arithmetic symbol, if any.
    pub fn symbol(self) -> Option<char> {
        match self {
            Branch::Add => Some('+'),
            Branch::Subtract => Some('-'),
            Branch::Unchanged => None,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Add => write!(f, "add"),
            Branch::Subtract => write!(f, "subtract"),
            Branch::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Everything a single run produced.
///
/// `operand` is `None` exactly when `branch` is [`Branch::Unchanged`], and
/// `consumed` is then 1; otherwise 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The final value of `x`.
    pub result: i64,
    /// The first integer read.
    pub initial: i64,
    /// The threshold `initial` was compared against.
    pub threshold: i64,
    pub branch: Branch,
    /// The second integer (`y` or `z`), when one was read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand: Option<i64>,
    /// How many integers were taken from the input.
    pub consumed: usize,
}

impl Outcome {
    /// Outcome of the `x == threshold` arm.
    pub fn unchanged(initial: i64, threshold: i64) -> Self {
        Self {
            result: initial,
            initial,
            threshold,
            branch: Branch::Unchanged,
            operand: None,
            consumed: 1,
        }
    }

    /// Outcome of an arm that read `operand` and produced `result`.
    pub fn adjusted(initial: i64, threshold: i64, branch: Branch, operand: i64, result: i64) -> Self {
        Self {
            result,
            initial,
            threshold,
            branch,
            operand: Some(operand),
            consumed: 2,
        }
    }
}
