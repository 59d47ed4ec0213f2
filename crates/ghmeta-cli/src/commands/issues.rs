// SPDX-License-Identifier: Apache-2.0

//! List a repository's issues as tab-separated lines.

use std::io::Write;

use anyhow::Result;
use ghmeta_core::{GitHubApi, RepoRef, show_repo_issues};
use tracing::info;

/// Print every issue of `repo` (open and closed) in API order.
///
/// The identifier is validated before any request is made.
pub async fn run(api: &dyn GitHubApi, repo: &str, out: &mut dyn Write) -> Result<()> {
    let repo = RepoRef::parse(repo)?;
    let count = show_repo_issues(api, &repo, out).await?;
    info!(repo = %repo, count, "Listed issues");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::FakeApi;
    use chrono::{TimeZone, Utc};
    use ghmeta_core::{GhMetaError, Issue, IssueState};

    #[tokio::test]
    async fn test_prints_issue_tsv() {
        let api = FakeApi {
            issues: vec![Issue {
                number: 1,
                state: IssueState::Open,
                title: "t".to_string(),
                updated_at: Utc.with_ymd_and_hms(2021, 6, 7, 8, 9, 10).unwrap(),
                url: "https://api.github.com/repos/owner/repo/issues/1".to_string(),
            }],
            ..FakeApi::default()
        };
        let mut out = Vec::new();

        run(&api, "owner/repo", &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2021-06-07 08:09:10\thttps://api.github.com/repos/owner/repo/issues/1\topen\tt\n"
        );
        assert_eq!(
            *api.requests.lock().unwrap(),
            vec!["issues owner/repo All 1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_identifier_makes_no_request() {
        let api = FakeApi::default();
        let mut out = Vec::new();

        let err = run(&api, "not-a-repo", &mut out).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GhMetaError>(),
            Some(GhMetaError::InvalidRepo { .. })
        ));
        assert!(api.requests.lock().unwrap().is_empty());
        assert!(out.is_empty());
    }
}
