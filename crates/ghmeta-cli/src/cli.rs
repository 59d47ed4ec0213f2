// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for ghmeta.
//!
//! Uses clap's derive API. The only input is an optional `owner/repo`
//! positional argument; its presence selects the listing.

use clap::Parser;

/// Footer shown by `--help`.
const AFTER_HELP: &str = "Requires the GITHUB_PERSONAL_ACCESS_TOKEN environment variable.\n\
    Configuration: ~/.config/ghmeta/config.toml or GHMETA_* environment variables.";

/// ghmeta - print GitHub repository and issue metadata.
///
/// Without arguments, lists the repositories owned by the token's user.
/// With an `owner/repo` argument, lists that repository's issues as
/// tab-separated `updated_at`, `url`, `state` and `title`.
#[derive(Parser)]
#[command(name = "ghmeta")]
#[command(version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Repository whose issues to list (e.g., "octocat/Hello-World")
    pub repo: Option<String>,
}

/// Listing selected by the arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// List repositories of the authenticated user.
    Repos,
    /// List all issues of a repository.
    Issues {
        /// Unparsed `owner/repo` identifier.
        repo: String,
    },
}

impl Cli {
    /// Maps the positional argument count onto a listing.
    pub fn into_command(self) -> Command {
        match self.repo {
            None => Command::Repos,
            Some(repo) => Command::Issues { repo },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_lists_repos() {
        let cli = Cli::try_parse_from(["ghmeta"]).unwrap();
        assert_eq!(cli.into_command(), Command::Repos);
    }

    #[test]
    fn test_one_argument_lists_issues() {
        let cli = Cli::try_parse_from(["ghmeta", "octocat/Hello-World"]).unwrap();
        assert_eq!(
            cli.into_command(),
            Command::Issues {
                repo: "octocat/Hello-World".to_string()
            }
        );
    }

    #[test]
    fn test_two_arguments_rejected() {
        assert!(Cli::try_parse_from(["ghmeta", "a/b", "c/d"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
