//! Dirtree CLI Binary
//!
//! Command-line interface for building content-addressed directory trees.

use clap::Parser;
use dirtree::cli::{map_error, Cli, RunContext};
use dirtree::config::{ConfigLoader, DirTreeConfig};
use dirtree::error::AppError;
use dirtree::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Dirtree CLI starting");

    let context = RunContext::with_config(config);

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// An explicit `--config` file replaces the global config file
fn load_config(cli: &Cli) -> Result<DirTreeConfig, AppError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

fn logging_requested(cli: &Cli) -> bool {
    cli.verbose
        || cli.log_level.is_some()
        || cli.log_format.is_some()
        || cli.log_output.is_some()
        || cli.log_file.is_some()
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults. Logging
/// stays off unless `--verbose` or a `--log-*` flag is given.
fn build_logging_config(cli: &Cli, loaded: &LoggingConfig) -> LoggingConfig {
    if !logging_requested(cli) {
        return LoggingConfig {
            level: "off".to_string(),
            ..loaded.clone()
        };
    }

    let mut config = loaded.clone();

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
