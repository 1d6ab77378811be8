//! declscope CLI
//!
//! Reports template specializations and calls in C++ sources, optionally
//! restricted to declarations whose qualified names match a filter.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Input;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_failures) => {
            if has_failures {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir().into_diagnostic()?;

    match cli.command {
        Commands::Print {
            files,
            filter,
            dump_calls,
        } => {
            let config = Config::load(cli.config.as_deref(), &cwd)?;
            let options = config.print_options(filter, dump_calls);
            commands::run_print(&Input::from_args(&files), options)
        }
        Commands::Check { files } => commands::run_check(&Input::from_args(&files)),
        Commands::Init { force } => {
            commands::run_init(&cwd, force)?;
            Ok(false)
        }
    }
}
