// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the ghmeta CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Logs go to stderr so stdout only carries listing output.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only (retries, failures)
//! ghmeta octocat/Hello-World
//!
//! # Page-by-page debug output
//! RUST_LOG=ghmeta_core=debug,ghmeta=debug ghmeta octocat/Hello-World
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "ghmeta=warn,ghmeta_core=warn,octocrab=error,reqwest=error";

/// Initialize the logging subsystem.
pub fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
