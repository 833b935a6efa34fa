//! Hosting platform access
//!
//! [`ApiClient`] speaks raw JSON to the hosted API; [`PullRequestApi`] is the
//! narrow surface the review workflow needs, implemented for GitHub by
//! [`GitHubService`].

mod client;
mod github;

pub use client::{ApiClient, ClientOptions, USER_AGENT};
pub use github::{GitHubService, decode_pull_requests};

use crate::error::Result;
use crate::types::{MergeResult, PullRequestSummary, RepositoryIdentity};
use async_trait::async_trait;

/// Pull request operations used by the review workflow
#[async_trait]
pub trait PullRequestApi: Send + Sync {
    /// List the open pull requests of `repo`
    async fn list_pull_requests(&self, repo: &RepositoryIdentity) -> Result<Vec<PullRequestSummary>>;

    /// Merge pull request `number` of `repo`
    async fn merge_pull_request(&self, repo: &RepositoryIdentity, number: u64)
    -> Result<MergeResult>;
}
