//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{ApiClient, PullRequestApi};
use crate::types::{MergeResult, PullRequestSummary, RepositoryIdentity};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

// REST response types for the pulls endpoints

#[derive(Deserialize)]
struct RestPullRequest {
    number: u64,
    title: String,
    html_url: Option<String>,
    user: RestUser,
    head: RestHead,
}

#[derive(Deserialize)]
struct RestUser {
    login: String,
}

#[derive(Deserialize)]
struct RestHead {
    #[serde(rename = "ref")]
    ref_name: String,
    /// `null` when the head repository was deleted
    repo: Option<RestRepo>,
}

#[derive(Deserialize)]
struct RestRepo {
    name: String,
    clone_url: String,
    owner: RestUser,
}

#[derive(Deserialize, Default)]
struct RestMergeResponse {
    #[serde(default = "merged_on_success")]
    merged: bool,
    sha: Option<String>,
    message: Option<String>,
}

// A 2xx merge response means the merge went through
const fn merged_on_success() -> bool {
    true
}

impl RestPullRequest {
    fn into_summary(self) -> Option<PullRequestSummary> {
        let Some(repo) = self.head.repo else {
            warn!(
                pr_number = self.number,
                "head repository no longer exists, skipping pull request"
            );
            return None;
        };

        Some(PullRequestSummary {
            number: self.number,
            title: self.title,
            author_login: self.user.login,
            head_ref: self.head.ref_name,
            head_clone_url: repo.clone_url,
            head_owner_login: repo.owner.login,
            head_repo_name: repo.name,
            html_url: self.html_url,
        })
    }
}

/// Decode a pull request listing
///
/// Pull requests whose head repository was deleted are dropped because
/// they can be neither cloned nor merged.
pub fn decode_pull_requests(path: &str, body: Value) -> Result<Vec<PullRequestSummary>> {
    let pulls: Vec<RestPullRequest> =
        serde_json::from_value(body).map_err(|e| Error::InvalidResponse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    Ok(pulls
        .into_iter()
        .filter_map(RestPullRequest::into_summary)
        .collect())
}

/// Decode a merge response
///
/// The request already succeeded, so a body that does not look like a
/// merge response is logged and treated as merged.
fn decode_merge_response(path: &str, body: Value) -> MergeResult {
    let response = match serde_json::from_value::<RestMergeResponse>(body) {
        Ok(response) => response,
        Err(e) => {
            warn!(path, error = %e, "unexpected merge response, assuming merged");
            RestMergeResponse {
                merged: true,
                ..RestMergeResponse::default()
            }
        }
    };

    MergeResult {
        merged: response.merged,
        sha: response.sha,
        message: response.message,
    }
}

/// GitHub service over the REST API
pub struct GitHubService {
    client: ApiClient,
}

impl GitHubService {
    /// Create a new GitHub service
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestApi for GitHubService {
    async fn list_pull_requests(&self, repo: &RepositoryIdentity) -> Result<Vec<PullRequestSummary>> {
        debug!(%repo, "listing pull requests");
        let path = format!("/repos/{}/{}/pulls", repo.owner, repo.name);
        let body = self.client.get(&path).await?;
        let pulls = decode_pull_requests(&path, body)?;
        debug!(%repo, count = pulls.len(), "listed pull requests");
        Ok(pulls)
    }

    async fn merge_pull_request(
        &self,
        repo: &RepositoryIdentity,
        number: u64,
    ) -> Result<MergeResult> {
        debug!(%repo, pr_number = number, "merging pull request");
        let path = format!("/repos/{}/{}/pulls/{number}/merge", repo.owner, repo.name);
        let body = self.client.put(&path).await?;

        let result = decode_merge_response(&path, body);
        debug!(
            pr_number = number,
            merged = result.merged,
            sha = ?result.sha,
            "merge complete"
        );
        Ok(result)
    }
}
