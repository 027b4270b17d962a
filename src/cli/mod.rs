//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::IsTerminal;

/// Turn off ANSI styling when stdout is not a terminal.
pub fn configure_color() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}
