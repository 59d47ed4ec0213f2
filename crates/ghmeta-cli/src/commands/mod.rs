// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the ghmeta CLI.

pub mod issues;
pub mod repos;

use std::io;

use anyhow::Result;
use ghmeta_core::GitHubApi;

use crate::cli::Command;

/// Dispatch to the appropriate listing, writing to stdout.
pub async fn run(command: Command, api: &dyn GitHubApi) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Repos => repos::run(api, &mut out).await,
        Command::Issues { repo } => issues::run(api, &repo, &mut out).await,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use ghmeta_core::{
        GhMetaError, GitHubApi, Issue, IssueStateFilter, Label, ListPage, RepoRef, Repository,
    };

    /// Single-page fake that records requests.
    #[derive(Default)]
    pub struct FakeApi {
        pub repos: Vec<Repository>,
        pub issues: Vec<Issue>,
        pub requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GitHubApi for FakeApi {
        async fn user_repos_page(&self, page: u32) -> Result<ListPage<Repository>, GhMetaError> {
            self.requests.lock().unwrap().push(format!("repos {page}"));
            Ok(ListPage::last(self.repos.clone()))
        }

        async fn issues_page(
            &self,
            repo: &RepoRef,
            state: IssueStateFilter,
            page: u32,
        ) -> Result<ListPage<Issue>, GhMetaError> {
            self.requests
                .lock()
                .unwrap()
                .push(format!("issues {repo} {state:?} {page}"));
            Ok(ListPage::last(self.issues.clone()))
        }

        async fn labels_page(
            &self,
            _repo: &RepoRef,
            _page: u32,
        ) -> Result<ListPage<Label>, GhMetaError> {
            Ok(ListPage::last(Vec::new()))
        }
    }
}
