// SPDX-License-Identifier: Apache-2.0

//! Read-only views of GitHub data.
//!
//! These mirror the remote state at fetch time and are discarded after
//! printing. Conversions from octocrab models keep only the fields the
//! listings use.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::GhMetaError;

/// A repository owned by the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository name without the owner.
    pub name: String,
}

impl From<octocrab::models::Repository> for Repository {
    fn from(repo: octocrab::models::Repository) -> Self {
        Self {
            name: repo.name,
        }
    }
}

/// Lifecycle state of a single issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    /// Open issue.
    Open,
    /// Closed issue.
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Open => write!(f, "open"),
            IssueState::Closed => write!(f, "closed"),
        }
    }
}

/// State filter for issue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueStateFilter {
    /// Only open issues.
    Open,
    /// Open and closed issues.
    All,
}

impl From<IssueStateFilter> for octocrab::params::State {
    fn from(filter: IssueStateFilter) -> Self {
        match filter {
            IssueStateFilter::Open => octocrab::params::State::Open,
            IssueStateFilter::All => octocrab::params::State::All,
        }
    }
}

/// An issue (or pull request) as returned by the issues endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue number within the repository.
    pub number: u64,
    /// Open or closed.
    pub state: IssueState,
    /// Issue title.
    pub title: String,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// API URL of the issue.
    pub url: String,
}

impl From<octocrab::models::issues::Issue> for Issue {
    fn from(issue: octocrab::models::issues::Issue) -> Self {
        let state = match issue.state {
            octocrab::models::IssueState::Closed => IssueState::Closed,
            _ => IssueState::Open,
        };
        Self {
            number: issue.number,
            state,
            title: issue.title,
            updated_at: issue.updated_at,
            url: issue.url.to_string(),
        }
    }
}

/// A repository label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Hex color without the leading `#`.
    pub color: String,
}

impl From<octocrab::models::Label> for Label {
    fn from(label: octocrab::models::Label) -> Self {
        Self {
            name: label.name,
            color: label.color,
        }
    }
}

/// A parsed `owner/repo` identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Account that owns the repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoRef {
    /// Parses an owner/repo string.
    ///
    /// Validates format: exactly one `/`, non-empty parts.
    ///
    /// # Errors
    ///
    /// Returns `GhMetaError::InvalidRepo` if the format is invalid.
    pub fn parse(s: &str) -> Result<Self, GhMetaError> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(GhMetaError::InvalidRepo {
                input: s.to_string(),
            });
        }
        Ok(Self {
            owner: parts[0].to_string(),
            repo: parts[1].to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// One page of a remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<T> {
    /// Items on this page, in the order the API returned them.
    pub items: Vec<T>,
    /// Whether the API advertised a following page.
    pub has_next: bool,
}

impl<T> ListPage<T> {
    /// A page with no successor.
    #[must_use]
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            has_next: false,
        }
    }

    /// Converts the items of an octocrab page, keeping its `next` marker.
    pub fn from_octocrab<U>(page: octocrab::Page<U>) -> Self
    where
        T: From<U>,
    {
        Self {
            has_next: page.next.is_some(),
            items: page.items.into_iter().map(T::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_ref_valid() {
        let repo = RepoRef::parse("octocat/Hello-World").unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.repo, "Hello-World");
        assert_eq!(repo.to_string(), "octocat/Hello-World");
    }

    #[test]
    fn test_parse_repo_ref_invalid_no_slash() {
        assert!(matches!(
            RepoRef::parse("octocat"),
            Err(GhMetaError::InvalidRepo { .. })
        ));
    }

    #[test]
    fn test_parse_repo_ref_invalid_empty_owner() {
        assert!(RepoRef::parse("/repo").is_err());
    }

    #[test]
    fn test_parse_repo_ref_invalid_empty_repo() {
        assert!(RepoRef::parse("owner/").is_err());
    }

    #[test]
    fn test_parse_repo_ref_invalid_extra_segment() {
        assert!(RepoRef::parse("a/b/c").is_err());
    }

    #[test]
    fn test_issue_state_display() {
        assert_eq!(IssueState::Open.to_string(), "open");
        assert_eq!(IssueState::Closed.to_string(), "closed");
    }
}
