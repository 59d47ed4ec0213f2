// SPDX-License-Identifier: Apache-2.0

//! Error types for ghmeta.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Remote failures are classified into authentication, not-found and
//! transient categories so callers can decide between retrying and giving up.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

use crate::auth::TOKEN_ENV_VAR;

/// Errors that can occur during ghmeta operations.
#[derive(Error, Debug)]
pub enum GhMetaError {
    /// The personal access token environment variable is unset or empty.
    #[error("This program needs an environment variable {}.", TOKEN_ENV_VAR)]
    MissingToken,

    /// A repository identifier was not of the form `owner/repo`.
    #[error("Invalid owner/repo format: expected owner/repo, got '{input}'")]
    InvalidRepo {
        /// The rejected input.
        input: String,
    },

    /// GitHub rejected the credential (401, or a 403 that is not a rate limit).
    #[error("GitHub authentication failed: {message}")]
    Authentication {
        /// Error message from GitHub.
        message: String,
    },

    /// The requested repository or collection does not exist or is not visible.
    #[error("Not found: {resource}")]
    NotFound {
        /// Description of the resource that was requested.
        resource: String,
    },

    /// Rate limiting, server-side failure or network failure.
    #[error("Transient GitHub failure: {message}")]
    Transient {
        /// Error message.
        message: String,
    },

    /// Any other GitHub API error.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },

    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Writing listing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl GhMetaError {
    /// Returns true if the failure is transient and the call may be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, GhMetaError::Transient { .. })
    }

    /// Classifies an octocrab error raised while requesting `resource`.
    ///
    /// `resource` is only used for the not-found message, e.g. `repository octocat/hello`.
    #[must_use]
    pub fn from_octocrab(err: octocrab::Error, resource: &str) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                classify_status(source.status_code.as_u16(), &source.message, resource)
            }
            e @ (octocrab::Error::Service { .. } | octocrab::Error::Hyper { .. }) => {
                GhMetaError::Transient {
                    message: e.to_string(),
                }
            }
            other => GhMetaError::GitHub {
                message: other.to_string(),
            },
        }
    }
}

impl From<octocrab::Error> for GhMetaError {
    fn from(err: octocrab::Error) -> Self {
        GhMetaError::from_octocrab(err, "GitHub resource")
    }
}

impl From<config::ConfigError> for GhMetaError {
    fn from(err: config::ConfigError) -> Self {
        GhMetaError::Config {
            message: err.to_string(),
        }
    }
}

/// Maps an HTTP status and GitHub message onto an error category.
///
/// GitHub reports primary and secondary rate limits as 403 with a message
/// mentioning the rate limit, so 403 is split on the message text.
pub(crate) fn classify_status(status: u16, message: &str, resource: &str) -> GhMetaError {
    match status {
        401 => GhMetaError::Authentication {
            message: message.to_string(),
        },
        403 if message.to_ascii_lowercase().contains("rate limit") => GhMetaError::Transient {
            message: message.to_string(),
        },
        403 => GhMetaError::Authentication {
            message: message.to_string(),
        },
        404 => GhMetaError::NotFound {
            resource: resource.to_string(),
        },
        429 | 500 | 502 | 503 | 504 => GhMetaError::Transient {
            message: format!("HTTP {status}: {message}"),
        },
        _ => GhMetaError::GitHub {
            message: format!("HTTP {status}: {message}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_status(401, "Bad credentials", "repository o/r");
        assert!(matches!(err, GhMetaError::Authentication { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_classify_forbidden_is_authentication() {
        let err = classify_status(403, "Resource not accessible by integration", "user repos");
        assert!(matches!(err, GhMetaError::Authentication { .. }));
    }

    #[test]
    fn test_classify_secondary_rate_limit_is_transient() {
        let err = classify_status(
            403,
            "You have exceeded a secondary rate limit. Please wait a few minutes.",
            "user repos",
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn test_classify_not_found_names_resource() {
        let err = classify_status(404, "Not Found", "repository octocat/missing");
        assert!(matches!(err, GhMetaError::NotFound { .. }));
        assert_eq!(err.to_string(), "Not found: repository octocat/missing");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_classify_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            let err = classify_status(status, "oops", "user repos");
            assert!(err.is_retryable(), "status {status} should be retryable");
        }
    }

    #[test]
    fn test_classify_other_status() {
        let err = classify_status(422, "Validation Failed", "user repos");
        assert!(matches!(err, GhMetaError::GitHub { .. }));
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn test_missing_token_message_names_variable() {
        let msg = GhMetaError::MissingToken.to_string();
        assert_eq!(
            msg,
            "This program needs an environment variable GITHUB_PERSONAL_ACCESS_TOKEN."
        );
    }
}
