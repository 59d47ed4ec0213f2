// SPDX-License-Identifier: Apache-2.0

//! ghmeta - print GitHub repository and issue metadata.
//!
//! Lists the repositories of the personal access token's user, or the issues
//! of one `owner/repo`, one line per item on stdout.

mod cli;
mod commands;
mod errors;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ghmeta_core::{EnvTokenProvider, OctocrabApi, config, create_client, load_token};
use tracing::debug;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // No client is built and no request is made without a token.
    let token = load_token(&EnvTokenProvider)?;

    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    let client = create_client(&token, &config.github)?;
    let api = OctocrabApi::new(client, &config.github);

    commands::run(cli.into_command(), &api).await
}
