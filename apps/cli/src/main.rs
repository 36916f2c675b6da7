//! # catalog: Product Catalog CLI
//!
//! Command-line front-end for the product backend.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           catalog <command>                             │
//! │                                                                         │
//! │  args (clap) ──► tracing ──► ClientConfig::load ──► --api-url override │
//! │                                                         │               │
//! │                                                         ▼               │
//! │                 commands::run ──► ProductClient ──► backend             │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │        stdout: tables / JSON        stderr: logs, errors                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Codes
//! - `0` success
//! - `1` any other failure
//! - `2` the product draft failed validation (nothing was sent)

mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use catalog_client::{ClientConfig, ClientError};

use crate::cli::{Cli, Command, ConfigCommand};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Init must work even when the existing file is what fails to load.
    if let Command::Config(ConfigCommand::Init { force }) = cli.command {
        return commands::init_config(cli.config, force);
    }

    let mut config = ClientConfig::load(cli.config.clone())?;
    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
        config.validate()?;
    }
    debug!(api_url = %config.api.url, "Configuration loaded");

    commands::run(cli.command, &config, cli.config).await
}

/// Prints `err` to stderr and picks the exit code.
fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(errors) = err.downcast_ref::<ClientError>().and_then(ClientError::field_errors) {
        eprintln!("The product has invalid fields:");
        eprint!("{}", render::field_errors(errors));
        return ExitCode::from(2);
    }

    eprintln!("error: {err:#}");
    ExitCode::FAILURE
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - Default: `warn,catalog=info`
/// - `-v`: debug for the catalog crates
/// - `-vv`: debug everywhere
/// - `RUST_LOG` wins over all of the above
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn,catalog=info",
        1 => "warn,catalog=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
