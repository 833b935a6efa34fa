//! Mock pull request API for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_review::error::{Error, Result};
use pr_review::platform::PullRequestApi;
use pr_review::types::{MergeResult, PullRequestSummary, RepositoryIdentity};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Call record for `merge_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl MergeCall {
    /// The REST path this call corresponds to
    pub fn path(&self) -> String {
        format!("/repos/{}/{}/pulls/{}/merge", self.owner, self.repo, self.number)
    }
}

/// Simple mock API for testing
///
/// Features:
/// - Queued listing responses (the last one repeats once the queue drains)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    list_responses: Mutex<VecDeque<Vec<PullRequestSummary>>>,
    merge_response: Mutex<MergeResult>,
    // Call tracking
    list_calls: Mutex<Vec<RepositoryIdentity>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    // Error injection
    error_on_list: Mutex<Option<u16>>,
    error_on_merge: Mutex<Option<u16>>,
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformService {
    /// Create a mock that lists no pull requests
    pub fn new() -> Self {
        Self {
            list_responses: Mutex::new(VecDeque::new()),
            merge_response: Mutex::new(MergeResult {
                merged: true,
                sha: Some("abc123".to_string()),
                message: Some("Pull Request successfully merged".to_string()),
            }),
            list_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_merge: Mutex::new(None),
        }
    }

    /// Queue the response for the next `list_pull_requests` call
    pub fn push_listing(&self, pulls: Vec<PullRequestSummary>) {
        self.list_responses.lock().unwrap().push_back(pulls);
    }

    /// Set what `merge_pull_request` reports
    pub fn set_merge_response(&self, result: MergeResult) {
        *self.merge_response.lock().unwrap() = result;
    }

    // === Error injection methods ===

    /// Make `list_pull_requests` fail with an API status
    pub fn fail_list(&self, status: u16) {
        *self.error_on_list.lock().unwrap() = Some(status);
    }

    /// Make `merge_pull_request` fail with an API status
    pub fn fail_merge(&self, status: u16) {
        *self.error_on_merge.lock().unwrap() = Some(status);
    }

    // === Call inspection ===

    pub fn list_calls(&self) -> Vec<RepositoryIdentity> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PullRequestApi for MockPlatformService {
    async fn list_pull_requests(&self, repo: &RepositoryIdentity) -> Result<Vec<PullRequestSummary>> {
        self.list_calls.lock().unwrap().push(repo.clone());

        if let Some(status) = *self.error_on_list.lock().unwrap() {
            return Err(Error::ApiStatus {
                status,
                path: format!("/repos/{}/{}/pulls", repo.owner, repo.name),
            });
        }

        let mut responses = self.list_responses.lock().unwrap();
        let pulls = if responses.len() > 1 {
            responses.pop_front().unwrap_or_default()
        } else {
            responses.front().cloned().unwrap_or_default()
        };
        Ok(pulls)
    }

    async fn merge_pull_request(
        &self,
        repo: &RepositoryIdentity,
        number: u64,
    ) -> Result<MergeResult> {
        let call = MergeCall {
            owner: repo.owner.clone(),
            repo: repo.name.clone(),
            number,
        };
        let path = call.path();
        self.merge_calls.lock().unwrap().push(call);

        if let Some(status) = *self.error_on_merge.lock().unwrap() {
            return Err(Error::ApiStatus { status, path });
        }
        Ok(self.merge_response.lock().unwrap().clone())
    }
}

/// Shares one [`MockPlatformService`] between a `RunContext` and the test
///
/// The context owns its API as a box, so the test keeps the other handle
/// to inspect recorded calls afterwards.
pub struct SharedMock(pub Arc<MockPlatformService>);

#[async_trait]
impl PullRequestApi for SharedMock {
    async fn list_pull_requests(&self, repo: &RepositoryIdentity) -> Result<Vec<PullRequestSummary>> {
        self.0.list_pull_requests(repo).await
    }

    async fn merge_pull_request(
        &self,
        repo: &RepositoryIdentity,
        number: u64,
    ) -> Result<MergeResult> {
        self.0.merge_pull_request(repo, number).await
    }
}
