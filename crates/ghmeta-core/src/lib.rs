// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # ghmeta Core
//!
//! Core library for the ghmeta CLI - prints GitHub repository and issue
//! metadata for the owner of a personal access token.
//!
//! This crate provides:
//! - Token loading from `GITHUB_PERSONAL_ACCESS_TOKEN`
//! - An authenticated GitHub client behind the [`GitHubApi`] trait
//! - Listing operations that write line-oriented output
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ghmeta_core::{EnvTokenProvider, GitHubConfig, OctocrabApi, create_client, load_token, show_repos};
//!
//! # async fn example() -> ghmeta_core::Result<()> {
//! let token = load_token(&EnvTokenProvider)?;
//! let config = GitHubConfig::default();
//! let api = OctocrabApi::new(create_client(&token, &config)?, &config);
//!
//! show_repos(&api, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - Token loading
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`github`] - Client construction and the remote-call boundary
//! - [`listing`] - Listing operations and line formats
//! - [`models`] - Repository, issue and label views
//! - [`retry`] - Backoff for transient failures

// ============================================================================
// Authentication
// ============================================================================

pub use auth::{EnvTokenProvider, TOKEN_ENV_VAR, TokenProvider, load_token};

// ============================================================================
// Error Handling
// ============================================================================

pub use error::GhMetaError;

/// Convenience Result type for ghmeta operations.
///
/// This is equivalent to `std::result::Result<T, GhMetaError>`.
pub type Result<T> = std::result::Result<T, GhMetaError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, config_dir, config_file_path, load_config};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::{GitHubApi, OctocrabApi, create_client};
pub use models::{Issue, IssueState, IssueStateFilter, Label, ListPage, RepoRef, Repository};

// ============================================================================
// Listings
// ============================================================================

pub use listing::{
    issue_as_summary, issue_as_update_log_tsv, label_line, show_repo_issues,
    show_repo_issues_as_summary, show_repo_labels, show_repos,
};

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod config;
pub mod error;
pub mod github;
pub mod listing;
pub mod models;
pub mod retry;
