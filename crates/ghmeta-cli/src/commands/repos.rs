// SPDX-License-Identifier: Apache-2.0

//! List the authenticated user's repositories.

use std::io::Write;

use anyhow::Result;
use ghmeta_core::{GitHubApi, show_repos};
use tracing::info;

/// Print one repository name per line.
pub async fn run(api: &dyn GitHubApi, out: &mut dyn Write) -> Result<()> {
    let count = show_repos(api, out).await?;
    info!(count, "Listed repositories");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::FakeApi;
    use ghmeta_core::Repository;

    #[tokio::test]
    async fn test_prints_repository_names() {
        let api = FakeApi {
            repos: ["a", "b"]
                .into_iter()
                .map(|name| Repository {
                    name: name.to_string(),
                })
                .collect(),
            ..FakeApi::default()
        };
        let mut out = Vec::new();

        run(&api, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }
}
