//! Clap argument types and CLI-over-config merging.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use adjuster::config::Config;
use adjuster::models::{OutputFormat, OverflowMode};

/// Read an integer, conditionally add or subtract a second one, print the result.
///
/// Below the threshold a second integer is read and added; above it, a second
/// integer is read and subtracted; at the threshold nothing more is read.
#[derive(Parser, Debug)]
#[command(name = "adjuster", version = adjuster::constants::VERSION)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Ignore config files; use defaults, environment and flags only.
    #[arg(long, global = true, default_value_t = false)]
    pub no_config: bool,

    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands. Without one, a single adjustment pass runs.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the default adjustment pass.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// File to read integers from (default: stdin; `-` also means stdin).
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Comparison point selecting add / subtract / unchanged.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Behaviour when the result overflows a 64-bit integer.
    #[arg(long, global = true)]
    pub overflow: Option<OverflowMode>,
}

impl RunArgs {
    /// Apply flags that were given on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(threshold) = self.threshold {
            config.adjust.threshold = threshold;
        }
        if let Some(overflow) = self.overflow {
            config.adjust.overflow = overflow;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_adjustment() {
        let cli = Cli::try_parse_from(["adjuster", "--input", "in.txt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.run.input, Some(PathBuf::from("in.txt")));
    }

    #[test]
    fn negative_threshold_parses() {
        let cli = Cli::try_parse_from(["adjuster", "--threshold", "-3"]).unwrap();
        assert_eq!(cli.run.threshold, Some(-3));
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::try_parse_from(["adjuster", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["adjuster", "-q", "-v"]).is_err());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["adjuster", "config", "--no-config"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Config)));
        assert!(cli.no_config);
        let cli = Cli::try_parse_from(["adjuster", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Version)));
    }

    #[test]
    fn policy_flags_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "adjuster", "config", "--threshold", "3", "--overflow", "checked", "--format", "json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Command::Config)));
        assert_eq!(cli.run.threshold, Some(3));
        assert_eq!(cli.run.overflow, Some(OverflowMode::Checked));
        assert_eq!(cli.run.format, Some(OutputFormat::Json));
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        let args = RunArgs {
            format: Some(OutputFormat::Json),
            threshold: Some(0),
            overflow: Some(OverflowMode::Checked),
            ..RunArgs::default()
        };
        args.apply(&mut config);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.adjust.threshold, 0);
        assert_eq!(config.adjust.overflow, OverflowMode::Checked);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let mut config = Config::default();
        config.adjust.threshold = 11;
        RunArgs::default().apply(&mut config);
        assert_eq!(config.adjust.threshold, 11);
    }
}
