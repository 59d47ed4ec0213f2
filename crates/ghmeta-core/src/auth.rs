// SPDX-License-Identifier: Apache-2.0

//! Personal access token loading.
//!
//! This module defines the `TokenProvider` trait, which abstracts where the
//! GitHub token comes from. The CLI resolves it from a single environment
//! variable; tests supply fixed tokens.

use secrecy::SecretString;
use tracing::{debug, instrument};

use crate::error::GhMetaError;

/// Environment variable holding the GitHub personal access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

/// Provides the GitHub credential for API calls.
///
/// Implementations return `None` when no token is available.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub personal access token.
    fn github_token(&self) -> Option<SecretString>;
}

/// Resolves the token from `GITHUB_PERSONAL_ACCESS_TOKEN`.
///
/// An empty value is treated as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => {
                debug!("Resolved GitHub token from {TOKEN_ENV_VAR}");
                Some(SecretString::from(token))
            }
            _ => {
                debug!("No GitHub token found in {TOKEN_ENV_VAR}");
                None
            }
        }
    }
}

/// Loads the token from `provider`.
///
/// # Errors
///
/// Returns `GhMetaError::MissingToken` if the provider has no token. There is
/// no fallback source.
#[instrument(skip(provider))]
pub fn load_token(provider: &dyn TokenProvider) -> Result<SecretString, GhMetaError> {
    provider.github_token().ok_or(GhMetaError::MissingToken)
}
