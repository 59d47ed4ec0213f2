// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `GhMetaError` and appends a hint per error
//! category. The library keeps the structured data; this module decides how
//! it reads on a terminal.

use anyhow::Error;
use ghmeta_core::{GhMetaError, TOKEN_ENV_VAR};

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `GhMetaError`, returns the error chain as-is.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<GhMetaError>() else {
        return format!("{error:#}");
    };

    match err {
        GhMetaError::MissingToken => format!(
            "{err}\n\nTip: Create a personal access token with the `repo` scope at \
             https://github.com/settings/tokens and run:\n  export {TOKEN_ENV_VAR}=<token>"
        ),
        GhMetaError::InvalidRepo { .. } => {
            format!("{err}\n\nTip: Pass the repository as owner/repo, e.g. octocat/Hello-World.")
        }
        GhMetaError::Authentication { .. } => format!(
            "{err}\n\nTip: Check that {TOKEN_ENV_VAR} is valid, not expired, and has the `repo` scope."
        ),
        GhMetaError::NotFound { .. } => format!(
            "{err}\n\nTip: Check the spelling, and that your token can see private repositories."
        ),
        GhMetaError::Transient { .. } => {
            format!("{err}\n\nTip: This is usually temporary. Try again in a moment.")
        }
        GhMetaError::Config { .. } => format!(
            "{err}\n\nTip: Check your config file at {}",
            ghmeta_core::config_file_path().display()
        ),
        GhMetaError::GitHub { .. } | GhMetaError::Io(_) => err.to_string(),
    }
}
