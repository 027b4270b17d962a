//! adjuster — read an integer, conditionally adjust it, print the result.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use adjuster::adjust::{self, AdjustError};
use adjuster::config::Config;
use adjuster::constants;
use adjuster::env::Env;
use adjuster::input;
use adjuster::logging;
use adjuster::output;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<AdjustError>()
            .map_or(1, AdjustError::exit_code);
        process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(cli.verbose, cli.quiet, &env);
    cli::configure_color();

    match cli.command {
        Some(Command::Version) => run_version(),
        Some(Command::Config) => run_config(&cli, &env),
        None => run_adjust(&cli, &env),
    }
}

/// Load layered config, then apply command-line flags on top.
fn load_config(cli: &Cli, env: &Env) -> Result<Config> {
    let mut config = if cli.no_config {
        Config::from_env(env)
    } else {
        let cwd = std::env::current_dir().context("failed to determine working directory")?;
        Config::load(Some(cwd.as_path()), env).context("failed to load configuration")?
    };
    cli.run.apply(&mut config);
    Ok(config)
}

/// One pass: read `x`, maybe read a second value, print the result.
fn run_adjust(cli: &Cli, env: &Env) -> Result<()> {
    let config = load_config(cli, env)?;
    let policy = config.policy();

    let mut source = input::open(cli.run.input.as_deref()).map_err(AdjustError::from)?;
    let outcome = adjust::run(&mut source, &policy)?;
    tracing::debug!(consumed = outcome.consumed, "done");

    let renderer = output::renderer_for(config.output.format);
    println!("{}", renderer.render(&outcome));
    Ok(())
}

/// Print the effective configuration.
fn run_config(cli: &Cli, env: &Env) -> Result<()> {
    let config = load_config(cli, env)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    if let Some(path) = Config::global_config_path() {
        println!("{}     {}", "config:".dimmed(), path.display());
    }
    Ok(())
}
