// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Builds the authenticated client once per process and exposes the remote
//! collections through the [`GitHubApi`] trait.

use std::time::Duration;

use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};

use crate::config::GitHubConfig;
use crate::error::GhMetaError;

pub mod api;

pub use api::{GitHubApi, OctocrabApi};

/// Creates an authenticated Octocrab client from a personal access token.
///
/// Applies the configured timeout to the connect and read phases and, when
/// set, points the client at a GitHub Enterprise API root. Octocrab's own
/// retry layer is disabled; retries happen only in [`crate::retry`].
///
/// # Errors
///
/// Returns `GhMetaError::Config` for an unparsable `base_uri` and
/// `GhMetaError::GitHub` if the client cannot be built.
#[instrument(skip(token, config), fields(base_uri = ?config.base_uri))]
pub fn create_client(token: &SecretString, config: &GitHubConfig) -> Result<Octocrab, GhMetaError> {
    info!("Creating GitHub client");

    let timeout = Duration::from_secs(config.api_timeout_seconds);
    let mut builder = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout));

    if let Some(base_uri) = &config.base_uri {
        builder = builder
            .base_uri(base_uri.as_str())
            .map_err(|e| GhMetaError::Config {
                message: format!("invalid github.base_uri '{base_uri}': {e}"),
            })?;
    }

    let client = builder.build().map_err(|e| GhMetaError::GitHub {
        message: format!("Failed to build GitHub client: {e}"),
    })?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_client_default_config() {
        let token = SecretString::from("ghp_test".to_string());
        assert!(create_client(&token, &GitHubConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_create_client_enterprise_base_uri() {
        let token = SecretString::from("ghp_test".to_string());
        let config = GitHubConfig {
            base_uri: Some("https://ghe.example.com/api/v3".to_string()),
            ..GitHubConfig::default()
        };
        assert!(create_client(&token, &config).is_ok());
    }

    #[tokio::test]
    async fn test_create_client_rejects_bad_base_uri() {
        let token = SecretString::from("ghp_test".to_string());
        let config = GitHubConfig {
            base_uri: Some("not a uri".to_string()),
            ..GitHubConfig::default()
        };
        let err = create_client(&token, &config).unwrap_err();
        assert!(matches!(err, GhMetaError::Config { .. }));
    }
}
