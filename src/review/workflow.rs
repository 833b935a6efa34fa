//! The review loop

use super::context::RunContext;
use super::progress::{ReviewEvent, ReviewProgress};
use super::prompt::Prompter;
use crate::checkout::{CheckoutRunner, clone_path};
use crate::error::{ReviewStep, Result};
use crate::types::{PullRequestSummary, RepositoryIdentity, Selection};
use tracing::debug;

/// Why the loop stopped without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// The repository has no open pull requests left
    NoPullRequests,
    /// The maintainer picked the cancel entry
    Cancelled,
}

/// What happened during a review session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Why the loop stopped
    pub outcome: ReviewOutcome,
    /// Number of pull requests that were selected for review
    pub reviewed: usize,
    /// Pull requests reported as merged, in order
    pub merged: Vec<u64>,
}

/// Repository the merge request is sent to
///
/// Uses the head repository, so forks are addressed the same way the pull
/// request records them.
pub fn merge_target(pr: &PullRequestSummary) -> RepositoryIdentity {
    RepositoryIdentity {
        owner: pr.head_owner_login.clone(),
        name: pr.head_repo_name.clone(),
    }
}

/// Drive the review loop until the list is empty or the maintainer cancels
///
/// Any error ends the loop immediately; nothing is retried or rolled back,
/// so a failed iteration leaves its clone on disk.
pub async fn run_review_loop(
    ctx: &RunContext,
    prompter: &dyn Prompter,
    runner: &dyn CheckoutRunner,
    progress: &dyn ReviewProgress,
) -> Result<ReviewSummary> {
    let mut reviewed = 0;
    let mut merged = Vec::new();

    let outcome = loop {
        progress
            .on_event(ReviewEvent::Listing {
                repo: &ctx.identity,
            })
            .await;
        let pull_requests = match ctx.api.list_pull_requests(&ctx.identity).await {
            Ok(pulls) => pulls,
            Err(e) => {
                progress.on_event(ReviewEvent::ListingFailed).await;
                return Err(e);
            }
        };
        progress
            .on_event(ReviewEvent::Listed {
                count: pull_requests.len(),
            })
            .await;

        if pull_requests.is_empty() {
            break ReviewOutcome::NoPullRequests;
        }

        let Selection::PullRequest(pr) = prompter.select_pull_request(&pull_requests)? else {
            break ReviewOutcome::Cancelled;
        };

        reviewed += 1;
        if review_pull_request(ctx, &pr, prompter, runner, progress).await? {
            merged.push(pr.number);
        }
    };

    debug!(?outcome, reviewed, merged = merged.len(), "review loop finished");
    Ok(ReviewSummary {
        outcome,
        reviewed,
        merged,
    })
}

/// One iteration: clone, install, test, then merge if confirmed
///
/// Returns whether the pull request was merged.
async fn review_pull_request(
    ctx: &RunContext,
    pr: &PullRequestSummary,
    prompter: &dyn Prompter,
    runner: &dyn CheckoutRunner,
    progress: &dyn ReviewProgress,
) -> Result<bool> {
    debug!(pr_number = pr.number, "reviewing pull request");

    let path = clone_path(&ctx.base_dir, pr.number);
    progress.on_event(ReviewEvent::Cloning { pr, path: &path }).await;
    let checkout = runner.clone_pull_request(pr, &ctx.base_dir).await?;
    progress
        .on_event(ReviewEvent::StepSucceeded(ReviewStep::Clone))
        .await;

    runner.install_dependencies(&checkout.local_path).await?;
    progress
        .on_event(ReviewEvent::StepSucceeded(ReviewStep::InstallDependencies))
        .await;

    runner.run_tests(&checkout.local_path).await?;
    progress
        .on_event(ReviewEvent::StepSucceeded(ReviewStep::RunTests))
        .await;

    let pr = &checkout.pull_request;
    if !prompter.confirm_merge(pr)? {
        progress.on_event(ReviewEvent::MergeSkipped { pr }).await;
        return Ok(false);
    }

    let result = ctx
        .api
        .merge_pull_request(&merge_target(pr), pr.number)
        .await?;
    progress
        .on_event(ReviewEvent::Merged {
            pr,
            result: &result,
        })
        .await;

    Ok(result.merged)
}
