//! Core types for pr-review

use std::fmt;
use std::path::PathBuf;

/// The repository under review (owner + name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Login credentials for the hosting API
///
/// Held in memory for one run only. `Debug` never prints the secret.
#[derive(Clone)]
pub struct Credentials {
    /// Login name
    pub identity: String,
    /// Password or token
    pub secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// An open pull request as listed by the hosting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Login of the PR author
    pub author_login: String,
    /// Head branch name
    pub head_ref: String,
    /// Clone URL of the head repository
    pub head_clone_url: String,
    /// Owner login of the head repository
    pub head_owner_login: String,
    /// Name of the head repository
    pub head_repo_name: String,
    /// Web URL for the PR
    pub html_url: Option<String>,
}

/// What the maintainer picked from the pull request menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A pull request to review
    PullRequest(PullRequestSummary),
    /// The maintainer chose to stop
    Cancelled,
}

/// A pull request checked out on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutResult {
    /// The pull request that was cloned
    pub pull_request: PullRequestSummary,
    /// Directory holding the clone
    pub local_path: PathBuf,
    /// Branch that was checked out
    pub branch: String,
}

/// Outcome of a merge request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// Whether the API reports the PR as merged
    pub merged: bool,
    /// The SHA of the merge commit (if any)
    pub sha: Option<String>,
    /// Message from the API
    pub message: Option<String>,
}
