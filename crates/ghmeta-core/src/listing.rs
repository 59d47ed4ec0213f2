// SPDX-License-Identifier: Apache-2.0

//! Listing operations.
//!
//! Each operation pulls pages from a [`GitHubApi`] one at a time and writes
//! one line per item to the supplied writer before requesting the next page.
//! Items are written in the order the API returns them.

use std::future::Future;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::error::GhMetaError;
use crate::github::GitHubApi;
use crate::models::{Issue, IssueStateFilter, Label, ListPage, RepoRef, Repository};

/// Formats a UTC timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats an issue as `updated_at\turl\tstate\ttitle`.
#[must_use]
pub fn issue_as_update_log_tsv(issue: &Issue) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        format_timestamp(&issue.updated_at),
        issue.url,
        issue.state,
        issue.title
    )
}

/// Formats an issue as `owner/repo issue updated_at number state title `.
///
/// The line ends with a single space after the title.
#[must_use]
pub fn issue_as_summary(repo: &RepoRef, issue: &Issue) -> String {
    format!(
        "{repo} issue {} {} {} {} ",
        format_timestamp(&issue.updated_at),
        issue.number,
        issue.state,
        issue.title
    )
}

/// Formats a label as `owner/repo label:<name> color:<color>`.
#[must_use]
pub fn label_line(repo: &RepoRef, label: &Label) -> String {
    format!("{repo} label:{} color:{}", label.name, label.color)
}

/// Pulls pages starting at 1 until the API reports no next page.
///
/// Returns the number of items passed to `emit`.
async fn for_each_page<T, F, Fut>(
    mut fetch: F,
    mut emit: impl FnMut(&T) -> io::Result<()>,
) -> Result<usize, GhMetaError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ListPage<T>, GhMetaError>>,
{
    let mut page = 1;
    let mut count = 0;

    loop {
        let ListPage { items, has_next } = fetch(page).await?;
        debug!(page, items = items.len(), has_next, "Writing page");

        for item in &items {
            emit(item)?;
        }
        count += items.len();

        // An empty page ends the walk even if the API advertised more.
        if !has_next || items.is_empty() {
            break;
        }
        page += 1;
    }

    Ok(count)
}

/// Prints the name of each repository of the authenticated user.
#[instrument(skip(api, out))]
pub async fn show_repos(api: &dyn GitHubApi, out: &mut dyn Write) -> Result<usize, GhMetaError> {
    for_each_page(
        |page| api.user_repos_page(page),
        |repo: &Repository| writeln!(out, "{}", repo.name),
    )
    .await
}

/// Prints every issue of `repo`, open and closed, as tab-separated lines.
#[instrument(skip(api, out), fields(repo = %repo))]
pub async fn show_repo_issues(
    api: &dyn GitHubApi,
    repo: &RepoRef,
    out: &mut dyn Write,
) -> Result<usize, GhMetaError> {
    for_each_page(
        |page| api.issues_page(repo, IssueStateFilter::All, page),
        |issue: &Issue| writeln!(out, "{}", issue_as_update_log_tsv(issue)),
    )
    .await
}

/// Prints the open issues of `repo` as space-separated summaries.
#[instrument(skip(api, out), fields(repo = %repo))]
pub async fn show_repo_issues_as_summary(
    api: &dyn GitHubApi,
    repo: &RepoRef,
    out: &mut dyn Write,
) -> Result<usize, GhMetaError> {
    for_each_page(
        |page| api.issues_page(repo, IssueStateFilter::Open, page),
        |issue: &Issue| writeln!(out, "{}", issue_as_summary(repo, issue)),
    )
    .await
}

/// Prints the name and color of each label of `repo`.
#[instrument(skip(api, out), fields(repo = %repo))]
pub async fn show_repo_labels(
    api: &dyn GitHubApi,
    repo: &RepoRef,
    out: &mut dyn Write,
) -> Result<usize, GhMetaError> {
    for_each_page(
        |page| api.labels_page(repo, page),
        |label: &Label| writeln!(out, "{}", label_line(repo, label)),
    )
    .await
}
