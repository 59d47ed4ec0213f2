// SPDX-License-Identifier: Apache-2.0

//! Page-level access to the remote collections.
//!
//! [`GitHubApi`] is the boundary every listing goes through. Each call fetches
//! exactly one page and maps octocrab failures onto [`GhMetaError`]
//! categories. [`OctocrabApi`] is the production implementation.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::GitHubConfig;
use crate::error::GhMetaError;
use crate::models::{Issue, IssueStateFilter, Label, ListPage, RepoRef, Repository};
use crate::retry::with_retry;

/// Remote collections used by the listings, one page per call.
///
/// Pages are numbered from 1.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Repositories of the authenticated user.
    async fn user_repos_page(&self, page: u32) -> Result<ListPage<Repository>, GhMetaError>;

    /// Issues of `repo` matching `state`.
    async fn issues_page(
        &self,
        repo: &RepoRef,
        state: IssueStateFilter,
        page: u32,
    ) -> Result<ListPage<Issue>, GhMetaError>;

    /// Labels defined on `repo`.
    async fn labels_page(&self, repo: &RepoRef, page: u32) -> Result<ListPage<Label>, GhMetaError>;
}

/// Query parameters for `GET /user/repos`.
#[derive(Serialize)]
struct UserReposParams<'a> {
    affiliation: &'a str,
    per_page: u8,
    page: u32,
}

/// [`GitHubApi`] backed by a shared Octocrab client.
pub struct OctocrabApi {
    client: Octocrab,
    per_page: u8,
    max_retries: usize,
    repo_affiliation: String,
}

impl OctocrabApi {
    /// Wraps `client` with the paging and retry settings from `config`.
    #[must_use]
    pub fn new(client: Octocrab, config: &GitHubConfig) -> Self {
        Self {
            client,
            per_page: config.effective_per_page(),
            max_retries: config.max_retries,
            repo_affiliation: config.repo_affiliation.clone(),
        }
    }
}

#[async_trait]
impl GitHubApi for OctocrabApi {
    #[instrument(skip(self))]
    async fn user_repos_page(&self, page: u32) -> Result<ListPage<Repository>, GhMetaError> {
        let params = UserReposParams {
            affiliation: &self.repo_affiliation,
            per_page: self.per_page,
            page,
        };

        let result: octocrab::Page<octocrab::models::Repository> =
            with_retry(self.max_retries, || async {
                self.client
                    .get("/user/repos", Some(&params))
                    .await
                    .map_err(|e| {
                        GhMetaError::from_octocrab(e, "repositories of the authenticated user")
                    })
            })
            .await?;

        debug!(
            count = result.items.len(),
            has_next = result.next.is_some(),
            "Fetched repositories"
        );
        Ok(ListPage::from_octocrab(result))
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn issues_page(
        &self,
        repo: &RepoRef,
        state: IssueStateFilter,
        page: u32,
    ) -> Result<ListPage<Issue>, GhMetaError> {
        let resource = format!("repository {repo}");

        let result = with_retry(self.max_retries, || async {
            self.client
                .issues(&repo.owner, &repo.repo)
                .list()
                .state(state.into())
                .per_page(self.per_page)
                .page(page)
                .send()
                .await
                .map_err(|e| GhMetaError::from_octocrab(e, &resource))
        })
        .await?;

        debug!(
            count = result.items.len(),
            has_next = result.next.is_some(),
            "Fetched issues"
        );
        Ok(ListPage::from_octocrab(result))
    }

    #[instrument(skip(self), fields(repo = %repo))]
    async fn labels_page(&self, repo: &RepoRef, page: u32) -> Result<ListPage<Label>, GhMetaError> {
        let resource = format!("repository {repo}");

        let result = with_retry(self.max_retries, || async {
            self.client
                .issues(&repo.owner, &repo.repo)
                .list_labels_for_repo()
                .per_page(self.per_page)
                .page(page)
                .send()
                .await
                .map_err(|e| GhMetaError::from_octocrab(e, &resource))
        })
        .await?;

        debug!(
            count = result.items.len(),
            has_next = result.next.is_some(),
            "Fetched labels"
        );
        Ok(ListPage::from_octocrab(result))
    }
}
