//! Progress reporting for the review loop

use crate::error::ReviewStep;
use crate::types::{MergeResult, PullRequestSummary, RepositoryIdentity};
use async_trait::async_trait;
use std::path::Path;

/// Something worth telling the maintainer about
#[derive(Debug, Clone, Copy)]
pub enum ReviewEvent<'a> {
    /// Open pull requests are being fetched
    Listing {
        /// Repository being listed
        repo: &'a RepositoryIdentity,
    },
    /// Pull requests were listed
    Listed {
        /// Number of open pull requests
        count: usize,
    },
    /// Listing failed; the loop is about to return the error
    ListingFailed,
    /// A clone is about to start
    Cloning {
        /// The pull request being cloned
        pr: &'a PullRequestSummary,
        /// Destination directory
        path: &'a Path,
    },
    /// A step finished successfully
    StepSucceeded(ReviewStep),
    /// The merge endpoint answered
    Merged {
        /// The merged pull request
        pr: &'a PullRequestSummary,
        /// What the API reported
        result: &'a MergeResult,
    },
    /// The maintainer declined to merge
    MergeSkipped {
        /// The pull request left open
        pr: &'a PullRequestSummary,
    },
}

/// Receives [`ReviewEvent`]s as the loop advances
#[async_trait]
pub trait ReviewProgress: Send + Sync {
    /// Called for every event
    async fn on_event(&self, event: ReviewEvent<'_>);
}

/// Progress sink that ignores everything
pub struct NoopProgress;

#[async_trait]
impl ReviewProgress for NoopProgress {
    async fn on_event(&self, _event: ReviewEvent<'_>) {}
}
