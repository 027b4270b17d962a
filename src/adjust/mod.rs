//! The conditional adjustment itself.
//!
//! Compare `x` against the threshold. Below it, read `y` and add; above it,
//! read `z` and subtract; equal, read nothing. The second read only happens
//! inside the branch that needs it.

use thiserror::Error;

use crate::constants::DEFAULT_THRESHOLD;
use crate::input::{InputError, IntSource};
use crate::models::{Branch, Outcome, OverflowMode};

/// Errors from a single adjustment pass.
#[derive(Error, Debug)]
pub enum AdjustError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{initial} {} {operand} overflows a 64-bit integer", .branch.symbol().unwrap_or('?'))]
    Overflow {
        initial: i64,
        operand: i64,
        branch: Branch,
    },
}

impl AdjustError {
    /// Process exit status for this failure: 1 when the input could not be
    /// opened or read, 2 for exhausted or malformed input, 3 for checked
    /// overflow.
    pub fn exit_code(&self) -> i32 {
        match self {
            AdjustError::Input(InputError::Open { .. } | InputError::Io(_)) => 1,
            AdjustError::Input(InputError::Exhausted { .. } | InputError::Malformed { .. }) => 2,
            AdjustError::Overflow { .. } => 3,
        }
    }
}

/// Threshold and overflow behaviour for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub threshold: i64,
    pub overflow: OverflowMode,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            overflow: OverflowMode::default(),
        }
    }
}

impl Policy {
    /// Apply `branch` to `x` and `operand` under this policy's overflow mode.
    fn apply(&self, branch: Branch, x: i64, operand: i64) -> Result<i64, AdjustError> {
        let overflow = || AdjustError::Overflow {
            initial: x,
            operand,
            branch,
        };
        match (branch, self.overflow) {
            (Branch::Add, OverflowMode::Wrap) => Ok(x.wrapping_add(operand)),
            (Branch::Add, OverflowMode::Saturate) => Ok(x.saturating_add(operand)),
            (Branch::Add, OverflowMode::Checked) => x.checked_add(operand).ok_or_else(overflow),
            (Branch::Subtract, OverflowMode::Wrap) => Ok(x.wrapping_sub(operand)),
            (Branch::Subtract, OverflowMode::Saturate) => Ok(x.saturating_sub(operand)),
            (Branch::Subtract, OverflowMode::Checked) => {
                x.checked_sub(operand).ok_or_else(overflow)
            }
            (Branch::Unchanged, _) => Ok(x),
        }
    }
}

/// Adjust `x`, pulling the second value from `next_input` only if needed.
///
/// `next_input` is called at most once, and never when `x` equals the
/// threshold.
pub fn adjust<F>(x: i64, policy: &Policy, next_input: F) -> Result<Outcome, AdjustError>
where
    F: FnOnce() -> Result<i64, InputError>,
{
    let branch = Branch::select(x, policy.threshold);
    tracing::debug!(x, threshold = policy.threshold, %branch, "branch selected");

    if !branch.needs_operand() {
        return Ok(Outcome::unchanged(x, policy.threshold));
    }

    let operand = next_input()?;
    let result = policy.apply(branch, x, operand)?;
    tracing::debug!(operand, result, overflow = %policy.overflow, "adjusted");
    Ok(Outcome::adjusted(x, policy.threshold, branch, operand, result))
}

/// Read `x` from `source`, then [`adjust`] it using the same source.
pub fn run<S: IntSource + ?Sized>(source: &mut S, policy: &Policy) -> Result<Outcome, AdjustError> {
    let x = source.next_int()?;
    adjust(x, policy, || source.next_int())
}
